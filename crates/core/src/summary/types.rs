//! Summary data types.

use projfin_shared::types::{CostCenterId, CostCenterPlanId, ProjectId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytic::AnalyticLine;
use crate::ledger::LedgerLine;
use crate::sales::SalesOrder;

/// A cost center (analytic account) a project's transactions are tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenter {
    /// Cost-center ID.
    pub id: CostCenterId,
    /// Plan the cost center belongs to.
    pub plan_id: CostCenterPlanId,
}

/// A project whose financials are being aggregated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project ID.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Cost center, if one is assigned.
    pub cost_center: Option<CostCenter>,
    /// Manual sales amount used when no confirmed sales orders exist.
    pub manual_sales_amount_net: Decimal,
}

/// Immutable snapshot of all inputs for one project's computation.
///
/// The fetch is the host's concern; the engine only aggregates. Lines for
/// other cost centers may be present and are filtered out per extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// The designated project plan cost centers must belong to, if any.
    pub project_plan: Option<CostCenterPlanId>,
    /// Posted ledger lines.
    pub ledger_lines: Vec<LedgerLine>,
    /// Analytic lines.
    pub analytic_lines: Vec<AnalyticLine>,
    /// Sales orders.
    pub sales_orders: Vec<SalesOrder>,
}

/// Whether financial data could be derived for a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataAvailability {
    /// Data was aggregated from the project's cost center.
    Available,
    /// The project has no (valid) cost center; all figures are zero.
    #[default]
    NoAnalyticAccount,
}

/// Customer revenue extracted from invoices and credit notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerTotals {
    /// Invoiced amount excluding tax (invoices minus credit notes).
    pub invoiced_net: Decimal,
    /// Invoiced amount including tax.
    pub invoiced_gross: Decimal,
    /// Paid amount excluding tax, prorated by payment ratio.
    pub paid_net: Decimal,
    /// Paid amount including tax, prorated by payment ratio.
    pub paid_gross: Decimal,
    /// Invoice-only net contribution (always >= 0 per line).
    pub invoices_net: Decimal,
    /// Credit-note accumulator (always <= 0).
    pub credit_notes_net: Decimal,
}

/// Vendor costs extracted from bills and credit notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorTotals {
    /// Billed amount excluding tax (bills minus credit notes).
    pub total_net: Decimal,
    /// Billed amount including tax.
    pub total_gross: Decimal,
    /// Bill-only net contribution.
    pub bills_net: Decimal,
    /// Credit-note accumulator (always <= 0).
    pub credit_notes_net: Decimal,
}

/// Cash discounts taken and received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkontoTotals {
    /// Discounts granted to customers.
    pub customer_taken: Decimal,
    /// Discounts received from vendors.
    pub vendor_received: Decimal,
}

/// Labor figures extracted from timesheet lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborTotals {
    /// Raw hours booked.
    pub hours: Decimal,
    /// Labor costs (absolute amounts of timesheet lines).
    pub costs: Decimal,
    /// Hours adjusted by the per-employee HFC factor.
    pub adjusted_hours: Decimal,
}

/// Miscellaneous costs and revenue not covered by any other extractor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherTotals {
    /// Other costs (absolute value of negative amounts).
    pub costs: Decimal,
    /// Other revenue (positive amounts).
    pub revenue: Decimal,
}

/// Sales-order figures, or the manual fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTotals {
    /// Untaxed order total, or the project's manual sales amount.
    pub amount_net: Decimal,
    /// De-duplicated, sorted, comma-joined tax names across order lines.
    pub tax_names: String,
    /// Whether confirmed/done sales orders exist.
    pub has_orders: bool,
}

/// Complete financial summary of one project.
///
/// All fields are derived jointly; a summary is always recomputed and
/// exposed as a whole, never field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Whether the project has a valid cost center.
    pub has_analytic_account: bool,
    /// Data availability status.
    pub availability: DataAvailability,

    /// Untaxed sales-order total, or the manual fallback amount.
    pub sale_order_amount_net: Decimal,
    /// Whether confirmed/done sales orders exist.
    pub has_sales_orders: bool,
    /// Tax names across all counted order lines.
    pub sale_order_tax_names: String,

    /// Customer invoiced amount excluding tax.
    pub customer_invoiced_net: Decimal,
    /// Customer invoiced amount including tax.
    pub customer_invoiced_gross: Decimal,
    /// Customer paid amount excluding tax.
    pub customer_paid_net: Decimal,
    /// Customer paid amount including tax.
    pub customer_paid_gross: Decimal,
    /// Customer outstanding amount excluding tax (invoiced minus paid).
    pub customer_outstanding_net: Decimal,
    /// Customer outstanding amount including tax.
    pub customer_outstanding_gross: Decimal,
    /// Invoice-only customer net contribution.
    pub customer_invoices_net: Decimal,
    /// Customer credit notes (negative).
    pub customer_credit_notes_net: Decimal,

    /// Vendor billed amount excluding tax.
    pub vendor_total_net: Decimal,
    /// Vendor billed amount including tax.
    pub vendor_total_gross: Decimal,
    /// Bill-only vendor net contribution.
    pub vendor_bills_net: Decimal,
    /// Vendor credit notes (negative).
    pub vendor_credit_notes_net: Decimal,
    /// Vendor net costs with the surcharge factor applied.
    pub adjusted_vendor_bill_amount: Decimal,

    /// Cash discounts granted to customers.
    pub customer_skonto_taken: Decimal,
    /// Cash discounts received from vendors.
    pub vendor_skonto_received: Decimal,

    /// Raw timesheet hours booked.
    pub total_hours_booked: Decimal,
    /// HFC-adjusted timesheet hours.
    pub total_hours_booked_adjusted: Decimal,
    /// Raw labor costs.
    pub labor_costs: Decimal,
    /// Adjusted hours multiplied by the configured hourly rate.
    pub labor_costs_adjusted: Decimal,

    /// Other costs excluding tax.
    pub other_costs_net: Decimal,
    /// Other costs with the surcharge factor applied.
    pub adjusted_other_costs: Decimal,
    /// Other revenue excluding tax.
    pub other_revenue_net: Decimal,
    /// Raw total costs (labor plus other).
    pub total_costs_net: Decimal,

    /// Strict NET-to-NET profit/loss.
    pub profit_loss_net: Decimal,
    /// Absolute value of the loss, zero when profitable.
    pub negative_difference_net: Decimal,
    /// Forecast-style profit/loss using surcharge/HFC-adjusted costs.
    pub current_calculated_profit_loss: Decimal,
}
