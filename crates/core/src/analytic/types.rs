//! Analytic line domain types.

use chrono::NaiveDate;
use projfin_shared::types::{AnalyticLineId, CostCenterId, EmployeeId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::DocumentType;

/// Back-reference from an analytic line to the ledger line it was created
/// from, carrying just the attributes the exclusion rules need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedMoveLine {
    /// Document type of the parent document, if the line belongs to one.
    pub document_type: Option<DocumentType>,
    /// Whether the parent document has been reversed.
    pub is_reversed: bool,
    /// Code of the general-ledger account the line posts to.
    pub account_code: Option<String>,
}

/// One internal cost/revenue posting tied to a single cost center.
///
/// Negative `amount` is a cost, positive is revenue. `unit_amount` carries
/// hours and is meaningful only for timesheet lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticLine {
    /// Line ID.
    pub id: AnalyticLineId,
    /// Cost center the posting belongs to.
    pub cost_center_id: CostCenterId,
    /// Posting date.
    pub date: NaiveDate,
    /// Signed amount; negative = cost, positive = revenue.
    pub amount: Decimal,
    /// Whether this line is a timesheet entry.
    pub is_timesheet: bool,
    /// Hours booked; meaningful only when `is_timesheet` is true.
    pub unit_amount: Decimal,
    /// Employee the timesheet entry belongs to.
    pub employee_id: Option<EmployeeId>,
    /// Per-employee HFC multiplier; defaults to 1.0 when absent.
    pub employee_hfc_factor: Option<Decimal>,
    /// Back-reference to the originating ledger line, if any.
    pub move_line: Option<LinkedMoveLine>,
}

impl AnalyticLine {
    /// HFC factor to apply to this line's hours, defaulting to 1.0.
    #[must_use]
    pub fn hfc_factor(&self) -> Decimal {
        self.employee_hfc_factor.unwrap_or(Decimal::ONE)
    }
}
