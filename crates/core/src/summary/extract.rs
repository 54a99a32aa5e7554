//! The six extraction routines feeding the synthesizer.
//!
//! Each extractor scans the snapshot for one category of record. The
//! exclusion rules in [`other_amounts`] keep the five monetary extractors
//! mutually exclusive so nothing is counted twice.

use std::collections::BTreeSet;

use projfin_shared::types::CostCenterId;
use rust_decimal::Decimal;

use crate::analytic::{classify_account_code, AnalyticLine, SkontoSide};
use crate::ledger::{allocate_line, DocumentSide, LedgerLine};
use crate::sales::SalesOrder;

use super::types::{
    CustomerTotals, LaborTotals, OtherTotals, Project, SalesTotals, SkontoTotals, VendorTotals,
};

/// Shared scan over posted document lines of one side.
#[derive(Debug, Default)]
struct DocumentScan {
    net: Decimal,
    gross: Decimal,
    paid_net: Decimal,
    paid_gross: Decimal,
    invoices_net: Decimal,
    credit_notes_net: Decimal,
}

fn scan_documents(
    lines: &[LedgerLine],
    cost_center: CostCenterId,
    side: DocumentSide,
) -> DocumentScan {
    let mut scan = DocumentScan::default();

    for line in lines {
        if !line.is_eligible() || line.document_type.side() != Some(side) {
            continue;
        }
        let Some(amounts) = allocate_line(line, cost_center) else {
            continue;
        };

        let (net, gross) = if line.document_type.is_credit_note() {
            // Credit notes always contribute negatively, whatever the sign
            // the host delivered them with.
            scan.credit_notes_net -= amounts.net.abs();
            (-amounts.net.abs(), -amounts.gross.abs())
        } else {
            scan.invoices_net += amounts.net;
            (amounts.net, amounts.gross)
        };

        scan.net += net;
        scan.gross += gross;

        if let Some(ratio) = line.parent.payment_ratio() {
            scan.paid_net += net * ratio;
            scan.paid_gross += gross * ratio;
        }
    }

    scan
}

/// Extracts customer revenue from invoice and credit-note lines.
#[must_use]
pub fn customer_revenue(lines: &[LedgerLine], cost_center: CostCenterId) -> CustomerTotals {
    let scan = scan_documents(lines, cost_center, DocumentSide::Customer);
    CustomerTotals {
        invoiced_net: scan.net,
        invoiced_gross: scan.gross,
        paid_net: scan.paid_net,
        paid_gross: scan.paid_gross,
        invoices_net: scan.invoices_net,
        credit_notes_net: scan.credit_notes_net,
    }
}

/// Extracts vendor costs from bill and credit-note lines.
///
/// Payment proration is not tracked on the vendor side.
#[must_use]
pub fn vendor_costs(lines: &[LedgerLine], cost_center: CostCenterId) -> VendorTotals {
    let scan = scan_documents(lines, cost_center, DocumentSide::Vendor);
    VendorTotals {
        total_net: scan.net,
        total_gross: scan.gross,
        bills_net: scan.invoices_net,
        credit_notes_net: scan.credit_notes_net,
    }
}

/// Extracts cash discounts from analytic lines posted to Skonto accounts.
///
/// Timesheet lines belong to the labor extractor alone and are never
/// treated as discounts.
#[must_use]
pub fn skonto(lines: &[AnalyticLine], cost_center: CostCenterId) -> SkontoTotals {
    let mut totals = SkontoTotals::default();

    for line in lines {
        if line.cost_center_id != cost_center || line.is_timesheet {
            continue;
        }
        let Some(move_line) = &line.move_line else {
            continue;
        };
        let Some(code) = &move_line.account_code else {
            continue;
        };
        match classify_account_code(code) {
            Some(SkontoSide::Customer) => totals.customer_taken += line.amount.abs(),
            Some(SkontoSide::Vendor) => totals.vendor_received += line.amount.abs(),
            None => {}
        }
    }

    totals
}

/// Extracts hours and labor costs from timesheet lines.
#[must_use]
pub fn labor(lines: &[AnalyticLine], cost_center: CostCenterId) -> LaborTotals {
    let mut totals = LaborTotals::default();

    for line in lines {
        if line.cost_center_id != cost_center || !line.is_timesheet {
            continue;
        }
        totals.hours += line.unit_amount;
        totals.costs += line.amount.abs();
        totals.adjusted_hours += line.unit_amount * line.hfc_factor();
    }

    totals
}

/// Extracts miscellaneous costs and revenue.
///
/// Excludes anything already covered elsewhere: timesheet lines, lines
/// whose linked document carries any document type (invoices, bills, and
/// journal entries alike) or has been reversed, and lines posted to Skonto
/// accounts. This keeps the five monetary extractors mutually exclusive.
#[must_use]
pub fn other_amounts(lines: &[AnalyticLine], cost_center: CostCenterId) -> OtherTotals {
    let mut totals = OtherTotals::default();

    for line in lines {
        if line.cost_center_id != cost_center || line.is_timesheet {
            continue;
        }
        if let Some(move_line) = &line.move_line {
            if move_line.document_type.is_some() || move_line.is_reversed {
                continue;
            }
            if let Some(code) = &move_line.account_code {
                if classify_account_code(code).is_some() {
                    continue;
                }
            }
        }

        if line.amount < Decimal::ZERO {
            totals.costs += line.amount.abs();
        } else if line.amount > Decimal::ZERO {
            totals.revenue += line.amount;
        }
    }

    totals
}

/// Extracts confirmed sales-order figures, or falls back to the project's
/// manual sales amount when no counted orders exist.
#[must_use]
pub fn sales_orders(orders: &[SalesOrder], project: &Project) -> SalesTotals {
    let counted: Vec<&SalesOrder> = orders
        .iter()
        .filter(|order| order.project_id == project.id && order.state.is_counted())
        .collect();

    if counted.is_empty() {
        return SalesTotals {
            amount_net: project.manual_sales_amount_net,
            tax_names: String::new(),
            has_orders: false,
        };
    }

    let mut amount_net = Decimal::ZERO;
    let mut tax_names = BTreeSet::new();
    for order in counted {
        amount_net += order.untaxed_amount;
        for line in &order.lines {
            for name in &line.tax_names {
                if !name.is_empty() {
                    tax_names.insert(name.clone());
                }
            }
        }
    }

    SalesTotals {
        amount_net,
        tax_names: tax_names.into_iter().collect::<Vec<_>>().join(", "),
        has_orders: true,
    }
}
