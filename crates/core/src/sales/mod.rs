//! Sales-order inputs.

pub mod types;

pub use types::{OrderLine, OrderState, SalesOrder};
