//! Shared types, errors, and configuration for Projfin.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management for the analytics tunables

pub mod config;
pub mod error;
pub mod types;

pub use config::AnalyticsConfig;
pub use error::{AppError, AppResult};
