//! Per-project financial summary: extractors and profit/loss synthesis.
//!
//! Six independent extractors scan a read-only project snapshot and feed
//! one synthesizer. Their totals are mutually exclusive by construction:
//! a line counted as labor, Skonto, or an invoice/bill never also counts
//! as "other" cost or revenue.

pub mod extract;
pub mod service;
pub mod types;


#[cfg(test)]
mod service_props;

pub use service::SummaryService;
pub use types::{
    CostCenter, CustomerTotals, DataAvailability, FinancialSummary, LaborTotals, OtherTotals,
    Project, ProjectSnapshot, SalesTotals, SkontoTotals, VendorTotals,
};
