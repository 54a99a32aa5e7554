//! Property-based tests for proportional allocation.

use chrono::NaiveDate;
use proptest::prelude::*;
use projfin_shared::types::{CostCenterId, LedgerLineId};
use rust_decimal::Decimal;
use serde_json::json;

use super::allocation::{allocate_line, Allocation};
use super::types::{DocumentTotals, DocumentType, LedgerLine, PostedState};

/// Strategy to generate a monetary amount in cents, positive or negative.
fn money_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a percentage with two decimal places (0..=150%).
///
/// Percentages above 100 are deliberately allowed; the allocation map of a
/// single line is not required to sum to 100.
fn percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=15_000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy to generate an allocation map of 1 to 5 cost centers.
fn allocation_entries() -> impl Strategy<Value = Vec<(CostCenterId, Decimal)>> {
    prop::collection::vec(percentage(), 1..=5)
        .prop_map(|pcts| pcts.into_iter().map(|p| (CostCenterId::new(), p)).collect())
}

fn make_line(net: Decimal, entries: &[(CostCenterId, Decimal)]) -> LedgerLine {
    let payload = entries
        .iter()
        .map(|(id, pct)| (id.to_string(), json!(pct.to_string())))
        .collect::<serde_json::Map<_, _>>();

    LedgerLine {
        id: LedgerLineId::new(),
        date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        document_type: DocumentType::CustomerInvoice,
        posted_state: PostedState::Posted,
        net_amount: net,
        gross_amount: net,
        allocation: serde_json::Value::Object(payload),
        is_reversed: false,
        account_code: None,
        parent: DocumentTotals::default(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Allocation conservation: the per-center allocated net amounts of one
    /// line sum to `net_amount * total_percentage / 100`.
    #[test]
    fn prop_allocation_conservation(
        net in money_amount(),
        entries in allocation_entries(),
    ) {
        let line = make_line(net, &entries);

        let allocated: Decimal = entries
            .iter()
            .filter_map(|(center, _)| allocate_line(&line, *center))
            .map(|amounts| amounts.net)
            .sum();

        let total_pct: Decimal = entries.iter().map(|(_, pct)| *pct).sum();
        let expected = net * (total_pct / Decimal::ONE_HUNDRED);

        prop_assert_eq!(allocated, expected);
    }

    /// A cost center absent from the allocation map never receives a share.
    #[test]
    fn prop_unreferenced_center_gets_nothing(
        net in money_amount(),
        entries in allocation_entries(),
    ) {
        let line = make_line(net, &entries);
        prop_assert_eq!(allocate_line(&line, CostCenterId::new()), None);
    }

    /// Parsing a generated payload reproduces every percentage.
    #[test]
    fn prop_parse_roundtrip(entries in allocation_entries()) {
        let line = make_line(Decimal::ONE, &entries);
        let allocation = Allocation::parse(&line.allocation).unwrap();

        for (center, pct) in &entries {
            let share = allocation.share_of(*center);
            if pct.is_zero() {
                prop_assert_eq!(share, None);
            } else {
                prop_assert_eq!(share, Some(*pct / Decimal::ONE_HUNDRED));
            }
        }
    }
}
