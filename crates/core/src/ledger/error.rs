//! Ledger input error types.

use thiserror::Error;

/// Errors raised while parsing the raw allocation payload of a ledger line.
///
/// A malformed allocation never aborts a computation; the offending line is
/// skipped with a logged warning.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    /// The allocation payload is not a JSON object.
    #[error("Allocation payload is not an object")]
    NotAnObject,

    /// A key could not be parsed as a cost-center id.
    #[error("Invalid cost-center id in allocation: {0}")]
    InvalidCostCenter(String),

    /// A value could not be parsed as a percentage.
    #[error("Invalid percentage in allocation: {0}")]
    InvalidPercentage(String),
}
