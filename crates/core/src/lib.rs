//! Financial aggregation engine for Projfin.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. Given a read-only snapshot of ledger, analytic, and sales
//! data tagged with a project's cost center, it derives a complete
//! per-project financial summary.
//!
//! # Modules
//!
//! - `ledger` - Posted ledger-line inputs and proportional allocation
//! - `analytic` - Analytic lines, timesheets, and Skonto classification
//! - `sales` - Sales-order inputs
//! - `summary` - The six extractors and the profit/loss synthesizer
//! - `batch` - Chunked batch recompute over a host-provided store

pub mod analytic;
pub mod batch;
pub mod ledger;
pub mod sales;
pub mod summary;
