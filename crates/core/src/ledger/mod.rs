//! Posted ledger-line inputs and proportional allocation.
//!
//! Ledger lines are immutable records supplied by the host accounting
//! system. This module defines their shape and the shared allocation and
//! payment-proration utility used by the customer and vendor extractors.

pub mod allocation;
pub mod error;
pub mod types;

#[cfg(test)]
mod allocation_props;

pub use allocation::{allocate_line, AllocatedAmounts, Allocation};
pub use error::AllocationError;
pub use types::{DocumentSide, DocumentTotals, DocumentType, LedgerLine, PostedState};
