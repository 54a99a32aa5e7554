//! Sales-order domain types supplied by the sales subsystem.

use chrono::NaiveDate;
use projfin_shared::types::{ProjectId, SalesOrderId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a sales order.
///
/// Only confirmed or done orders contribute to the sales total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    /// Quotation being drafted.
    Draft,
    /// Quotation sent to the customer.
    Sent,
    /// Order confirmed by the customer.
    Confirmed,
    /// Order fully delivered and invoiced.
    Done,
    /// Order cancelled.
    Cancelled,
}

impl OrderState {
    /// Returns true if the order counts toward the sales total.
    #[must_use]
    pub fn is_counted(self) -> bool {
        matches!(self, Self::Confirmed | Self::Done)
    }
}

/// One line of a sales order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLine {
    /// Names of the taxes applied to this line.
    pub tax_names: Vec<String>,
}

/// A sales order linked to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrder {
    /// Order ID.
    pub id: SalesOrderId,
    /// Project the order belongs to.
    pub project_id: ProjectId,
    /// Order date.
    pub date: NaiveDate,
    /// Lifecycle state.
    pub state: OrderState,
    /// Order total excluding tax.
    pub untaxed_amount: Decimal,
    /// Order lines.
    pub lines: Vec<OrderLine>,
}
