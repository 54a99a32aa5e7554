//! Analytic lines, timesheets, and Skonto classification.
//!
//! Analytic lines are internal cost/revenue postings tied to exactly one
//! cost center. Timesheet lines carry hours and an optional per-employee
//! HFC factor; lines linked to ledger documents are classified here so the
//! extractors can keep their totals mutually exclusive.

pub mod skonto;
pub mod types;

pub use skonto::{classify_account_code, SkontoSide};
pub use types::{AnalyticLine, LinkedMoveLine};
