//! Ledger domain types consumed by the aggregation engine.
//!
//! These records mirror the data contract of the host accounting system.
//! The engine only reads them; posting, tax calculation, and payment
//! reconciliation happen upstream.

use chrono::NaiveDate;
use projfin_shared::types::LedgerLineId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Document type of the ledger line's parent financial document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Invoice issued to a customer.
    CustomerInvoice,
    /// Credit note issued to a customer.
    CustomerCreditNote,
    /// Bill received from a vendor.
    VendorBill,
    /// Credit note received from a vendor.
    VendorCreditNote,
    /// General journal entry.
    JournalEntry,
}

impl DocumentType {
    /// Returns true for customer-facing documents.
    #[must_use]
    pub fn is_customer(self) -> bool {
        matches!(self, Self::CustomerInvoice | Self::CustomerCreditNote)
    }

    /// Returns true for vendor-facing documents.
    #[must_use]
    pub fn is_vendor(self) -> bool {
        matches!(self, Self::VendorBill | Self::VendorCreditNote)
    }

    /// Returns true for credit notes on either side.
    #[must_use]
    pub fn is_credit_note(self) -> bool {
        matches!(self, Self::CustomerCreditNote | Self::VendorCreditNote)
    }

    /// Returns the side this document type belongs to, if any.
    #[must_use]
    pub fn side(self) -> Option<DocumentSide> {
        match self {
            Self::CustomerInvoice | Self::CustomerCreditNote => Some(DocumentSide::Customer),
            Self::VendorBill | Self::VendorCreditNote => Some(DocumentSide::Vendor),
            Self::JournalEntry => None,
        }
    }
}

/// Side of a financial document: customer revenue or vendor cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSide {
    /// Customer invoices and credit notes.
    Customer,
    /// Vendor bills and credit notes.
    Vendor,
}

/// Posting state of the parent document.
///
/// Only posted lines are eligible for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostedState {
    /// Document has been posted (immutable).
    Posted,
    /// Document is still a draft.
    Draft,
}

impl PostedState {
    /// Returns true if the document has been posted.
    #[must_use]
    pub fn is_posted(self) -> bool {
        matches!(self, Self::Posted)
    }
}

/// Totals of the parent document, used to derive the payment ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Total amount of the parent document.
    pub amount_total: Decimal,
    /// Amount still open on the parent document.
    pub amount_residual: Decimal,
}

impl DocumentTotals {
    /// Fraction of the parent document that has been paid.
    ///
    /// Returns `None` when the document total is zero, in which case no
    /// payment proration is applied.
    #[must_use]
    pub fn payment_ratio(&self) -> Option<Decimal> {
        if self.amount_total.is_zero() {
            None
        } else {
            Some((self.amount_total - self.amount_residual) / self.amount_total)
        }
    }
}

/// One line of a posted financial document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerLine {
    /// Line ID.
    pub id: LedgerLineId,
    /// Date of the parent document.
    pub date: NaiveDate,
    /// Document type of the parent document.
    pub document_type: DocumentType,
    /// Posting state of the parent document.
    pub posted_state: PostedState,
    /// Line amount excluding tax.
    pub net_amount: Decimal,
    /// Line amount including tax.
    pub gross_amount: Decimal,
    /// Raw allocation payload: cost-center id to percentage.
    ///
    /// Percentages across all cost centers need not sum to 100. The payload
    /// arrives as free-form JSON from the host and is parsed leniently.
    pub allocation: serde_json::Value,
    /// Whether the parent document has been reversed.
    pub is_reversed: bool,
    /// Code of the general-ledger account this line posts to.
    pub account_code: Option<String>,
    /// Totals of the parent document.
    pub parent: DocumentTotals,
}

impl LedgerLine {
    /// Returns true if the line may contribute to any total.
    ///
    /// Reversed or unposted lines are fully excluded.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.posted_state.is_posted() && !self.is_reversed
    }
}
