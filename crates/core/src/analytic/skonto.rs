//! Skonto (cash discount) account classification.
//!
//! Cash discounts are tracked via dedicated SKR03/SKR04 ledger accounts.
//! Classification is by account-code prefix so that sub-accounts such as
//! `73001` match their parent discount account.

use serde::{Deserialize, Serialize};

/// Customer-side cash discount account code prefixes (discounts granted).
pub const CUSTOMER_SKONTO_PREFIXES: [&str; 5] = ["7300", "7301", "7302", "7303", "2130"];

/// Vendor-side cash discount account code prefixes (discounts received).
pub const VENDOR_SKONTO_PREFIXES: [&str; 5] = ["4730", "4731", "4732", "4733", "2670"];

/// Side of a cash discount: granted to a customer or received from a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkontoSide {
    /// Discount granted to a customer (revenue reduction).
    Customer,
    /// Discount received from a vendor (cost reduction).
    Vendor,
}

/// Classifies a general-ledger account code as a Skonto account.
///
/// Returns `None` for codes outside both prefix sets.
#[must_use]
pub fn classify_account_code(code: &str) -> Option<SkontoSide> {
    if CUSTOMER_SKONTO_PREFIXES.iter().any(|p| code.starts_with(p)) {
        Some(SkontoSide::Customer)
    } else if VENDOR_SKONTO_PREFIXES.iter().any(|p| code.starts_with(p)) {
        Some(SkontoSide::Vendor)
    } else {
        None
    }
}
