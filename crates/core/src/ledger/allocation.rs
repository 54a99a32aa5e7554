//! Proportional allocation of ledger lines to cost centers.
//!
//! A ledger line carries a raw JSON map of cost-center id to percentage.
//! This module parses that payload and computes the net/gross share a line
//! contributes to one cost center.

use std::collections::HashMap;
use std::str::FromStr;

use projfin_shared::types::CostCenterId;
use rust_decimal::Decimal;
use serde_json::Value;

use super::error::AllocationError;
use super::types::LedgerLine;

/// Parsed allocation map of a ledger line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation(HashMap<CostCenterId, Decimal>);

impl Allocation {
    /// Parses the raw allocation payload of a ledger line.
    ///
    /// Keys must be cost-center UUIDs; values may be JSON numbers or
    /// numeric strings. Percentages need not sum to 100.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError` if the payload is not an object or any
    /// entry cannot be parsed.
    pub fn parse(value: &Value) -> Result<Self, AllocationError> {
        let map = value.as_object().ok_or(AllocationError::NotAnObject)?;

        let mut parsed = HashMap::with_capacity(map.len());
        for (key, raw_pct) in map {
            let cost_center = CostCenterId::from_str(key)
                .map_err(|_| AllocationError::InvalidCostCenter(key.clone()))?;
            let pct = match raw_pct {
                Value::Number(n) => Decimal::from_str(&n.to_string())
                    .map_err(|_| AllocationError::InvalidPercentage(n.to_string())),
                Value::String(s) => Decimal::from_str(s.trim())
                    .map_err(|_| AllocationError::InvalidPercentage(s.clone())),
                other => Err(AllocationError::InvalidPercentage(other.to_string())),
            }?;
            parsed.insert(cost_center, pct);
        }

        Ok(Self(parsed))
    }

    /// Creates an allocation from already-typed entries.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (CostCenterId, Decimal)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Fractional share (`pct / 100`) allocated to a cost center.
    ///
    /// Returns `None` if the cost center is absent or its percentage is zero.
    #[must_use]
    pub fn share_of(&self, cost_center: CostCenterId) -> Option<Decimal> {
        let pct = self.0.get(&cost_center).copied()?;
        if pct.is_zero() {
            None
        } else {
            Some(pct / Decimal::ONE_HUNDRED)
        }
    }

    /// Sum of all percentages in the map.
    #[must_use]
    pub fn total_percentage(&self) -> Decimal {
        self.0.values().copied().sum()
    }

    /// Iterates over the cost centers referenced by this allocation.
    pub fn cost_centers(&self) -> impl Iterator<Item = CostCenterId> + '_ {
        self.0.keys().copied()
    }

    /// Returns true if no cost center is referenced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Net and gross amounts of one ledger line allocated to one cost center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatedAmounts {
    /// Allocated amount excluding tax.
    pub net: Decimal,
    /// Allocated amount including tax.
    pub gross: Decimal,
}

/// Computes the net/gross share a ledger line contributes to a cost center.
///
/// Returns `None` if the cost center has no non-zero share in the line's
/// allocation. A malformed allocation payload is logged and treated as no
/// contribution; it never aborts the computation.
#[must_use]
pub fn allocate_line(line: &LedgerLine, cost_center: CostCenterId) -> Option<AllocatedAmounts> {
    let allocation = match Allocation::parse(&line.allocation) {
        Ok(allocation) => allocation,
        Err(err) => {
            tracing::warn!(
                line_id = %line.id,
                error = %err,
                "skipping ledger line with malformed allocation"
            );
            return None;
        }
    };

    let share = allocation.share_of(cost_center)?;
    Some(AllocatedAmounts {
        net: line.net_amount * share,
        gross: line.gross_amount * share,
    })
}
