//! Property-based tests for the extractors and the synthesizer.

use chrono::NaiveDate;
use proptest::prelude::*;
use projfin_shared::config::AnalyticsConfig;
use projfin_shared::types::{
    AnalyticLineId, CostCenterId, CostCenterPlanId, LedgerLineId, ProjectId,
};
use rust_decimal::Decimal;
use serde_json::json;

use crate::analytic::{AnalyticLine, LinkedMoveLine};
use crate::ledger::{DocumentTotals, DocumentType, LedgerLine, PostedState};

use super::extract;
use super::service::SummaryService;
use super::types::{CostCenter, Project, ProjectSnapshot};

/// Strategy to generate a monetary amount in cents, positive or negative.
fn money_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a non-negative monetary amount in cents.
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn document_type() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        Just(DocumentType::CustomerInvoice),
        Just(DocumentType::CustomerCreditNote),
        Just(DocumentType::VendorBill),
        Just(DocumentType::VendorCreditNote),
        Just(DocumentType::JournalEntry),
    ]
}

/// Account codes covering both Skonto sides and ordinary accounts.
fn account_code() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("7300".to_string())),
        Just(Some("2130".to_string())),
        Just(Some("4731".to_string())),
        Just(Some("2670".to_string())),
        Just(Some("4400".to_string())),
        Just(Some("8400".to_string())),
    ]
}

fn linked_move_line() -> impl Strategy<Value = Option<LinkedMoveLine>> {
    prop_oneof![
        Just(None),
        (prop::option::of(document_type()), any::<bool>(), account_code()).prop_map(
            |(document_type, is_reversed, account_code)| {
                Some(LinkedMoveLine {
                    document_type,
                    is_reversed,
                    account_code,
                })
            }
        ),
    ]
}

prop_compose! {
    fn analytic_line(cost_center: CostCenterId)(
        amount in money_amount(),
        is_timesheet in any::<bool>(),
        hours in non_negative_amount(),
        move_line in linked_move_line(),
    ) -> AnalyticLine {
        AnalyticLine {
            id: AnalyticLineId::new(),
            cost_center_id: cost_center,
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            amount,
            is_timesheet,
            unit_amount: hours,
            employee_id: None,
            employee_hfc_factor: None,
            move_line,
        }
    }
}

prop_compose! {
    fn ledger_line(cost_center: CostCenterId)(
        document_type in document_type(),
        net in non_negative_amount(),
        pct in (0i64..=10_000i64).prop_map(|h| Decimal::new(h, 2)),
        residual_pct in (0i64..=100i64).prop_map(Decimal::from),
        is_reversed in any::<bool>(),
        posted in any::<bool>(),
    ) -> LedgerLine {
        let gross = net * Decimal::new(119, 2);
        LedgerLine {
            id: LedgerLineId::new(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            document_type,
            posted_state: if posted { PostedState::Posted } else { PostedState::Draft },
            net_amount: net,
            gross_amount: gross,
            allocation: json!({ cost_center.to_string(): pct.to_string() }),
            is_reversed,
            account_code: None,
            parent: DocumentTotals {
                amount_total: gross,
                amount_residual: gross * residual_pct / Decimal::ONE_HUNDRED,
            },
        }
    }
}

fn make_project(cost_center: CostCenterId, plan: CostCenterPlanId) -> Project {
    Project {
        id: ProjectId::new(),
        name: "prop project".to_string(),
        cost_center: Some(CostCenter {
            id: cost_center,
            plan_id: plan,
        }),
        manual_sales_amount_net: Decimal::ZERO,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Outstanding amounts are exactly invoiced minus paid, for any input.
    #[test]
    fn prop_outstanding_identity(lines in {
        let center = CostCenterId::new();
        prop::collection::vec(ledger_line(center), 0..20)
            .prop_map(move |lines| (center, lines))
    }) {
        let (center, lines) = lines;
        let plan = CostCenterPlanId::new();
        let project = make_project(center, plan);
        let snapshot = ProjectSnapshot {
            project_plan: Some(plan),
            ledger_lines: lines,
            ..ProjectSnapshot::default()
        };

        let summary = SummaryService::compute(&project, &snapshot, &AnalyticsConfig::default());
        prop_assert_eq!(
            summary.customer_outstanding_net,
            summary.customer_invoiced_net - summary.customer_paid_net
        );
        prop_assert_eq!(
            summary.customer_outstanding_gross,
            summary.customer_invoiced_gross - summary.customer_paid_gross
        );
    }

    /// For non-negative line amounts, the credit-note accumulators stay
    /// non-positive and the invoice accumulators non-negative.
    #[test]
    fn prop_credit_note_signs(lines in {
        let center = CostCenterId::new();
        prop::collection::vec(ledger_line(center), 0..20)
            .prop_map(move |lines| (center, lines))
    }) {
        let (center, lines) = lines;
        let customer = extract::customer_revenue(&lines, center);
        let vendor = extract::vendor_costs(&lines, center);

        prop_assert!(customer.credit_notes_net <= Decimal::ZERO);
        prop_assert!(vendor.credit_notes_net <= Decimal::ZERO);
        prop_assert!(customer.invoices_net >= Decimal::ZERO);
        prop_assert!(vendor.bills_net >= Decimal::ZERO);
    }

    /// Reversed documents contribute zero to every total.
    #[test]
    fn prop_reversed_lines_contribute_nothing(lines in {
        let center = CostCenterId::new();
        prop::collection::vec(ledger_line(center), 0..20)
            .prop_map(move |lines| (center, lines))
    }) {
        let (center, mut lines) = lines;
        for line in &mut lines {
            line.is_reversed = true;
        }

        let customer = extract::customer_revenue(&lines, center);
        let vendor = extract::vendor_costs(&lines, center);
        prop_assert_eq!(customer, Default::default());
        prop_assert_eq!(vendor, Default::default());
    }

    /// `negative_difference_net` is zero for profits and the absolute loss
    /// otherwise.
    #[test]
    fn prop_negative_difference_rule(
        ledger in {
            let center = CostCenterId::new();
            prop::collection::vec(ledger_line(center), 0..10)
                .prop_map(move |lines| (center, lines))
        },
        analytic in prop::collection::vec(analytic_line(CostCenterId::new()), 0..10),
    ) {
        let (center, ledger_lines) = ledger;
        let plan = CostCenterPlanId::new();
        let project = make_project(center, plan);
        let mut analytic_lines = analytic;
        for line in &mut analytic_lines {
            line.cost_center_id = center;
        }
        let snapshot = ProjectSnapshot {
            project_plan: Some(plan),
            ledger_lines,
            analytic_lines,
            ..ProjectSnapshot::default()
        };

        let summary = SummaryService::compute(&project, &snapshot, &AnalyticsConfig::default());
        if summary.profit_loss_net >= Decimal::ZERO {
            prop_assert_eq!(summary.negative_difference_net, Decimal::ZERO);
        } else {
            prop_assert_eq!(summary.negative_difference_net, -summary.profit_loss_net);
        }
    }

    /// No analytic line is counted by more than one of the labor, Skonto,
    /// and other extractors.
    #[test]
    fn prop_analytic_extractors_are_mutually_exclusive(
        line in analytic_line(CostCenterId::new()),
    ) {
        let center = line.cost_center_id;
        let singleton = [line];

        let labor = extract::labor(&singleton, center);
        let skonto = extract::skonto(&singleton, center);
        let other = extract::other_amounts(&singleton, center);

        let counted_by_labor = labor != Default::default();
        let counted_by_skonto = skonto != Default::default();
        let counted_by_other = other != Default::default();

        let counted = usize::from(counted_by_labor)
            + usize::from(counted_by_skonto)
            + usize::from(counted_by_other);
        prop_assert!(counted <= 1, "line counted by {counted} extractors");
    }

    /// Recomputing with unchanged inputs yields identical output.
    #[test]
    fn prop_recompute_is_idempotent(
        ledger in {
            let center = CostCenterId::new();
            prop::collection::vec(ledger_line(center), 0..10)
                .prop_map(move |lines| (center, lines))
        },
    ) {
        let (center, ledger_lines) = ledger;
        let plan = CostCenterPlanId::new();
        let project = make_project(center, plan);
        let snapshot = ProjectSnapshot {
            project_plan: Some(plan),
            ledger_lines,
            ..ProjectSnapshot::default()
        };
        let config = AnalyticsConfig::default();

        let first = SummaryService::compute(&project, &snapshot, &config);
        let second = SummaryService::compute(&project, &snapshot, &config);
        prop_assert_eq!(first, second);
    }
}
