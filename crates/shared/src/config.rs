//! Analytics configuration management.
//!
//! The two tunables are read once per batch invocation and held immutable
//! for its duration so every project in the batch sees the same values.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

fn default_hourly_rate() -> Decimal {
    Decimal::new(66, 0)
}

fn default_surcharge_factor() -> Decimal {
    Decimal::new(130, 2)
}

/// Raw configuration values as they arrive from files or the environment.
///
/// Values are kept as strings so that an unparsable value can fall back to
/// its default instead of failing the whole load.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawAnalyticsConfig {
    /// Hourly rate applied to HFC-adjusted timesheet hours.
    general_hourly_rate: Option<String>,
    /// Surcharge factor applied to vendor bills and other costs.
    vendor_bill_surcharge_factor: Option<String>,
}

/// Tunable parameters for the financial aggregation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Rate multiplied with adjusted hours to derive adjusted labor costs.
    pub hourly_rate: Decimal,
    /// Markup factor applied to vendor costs in the forecast P&L view.
    pub surcharge_factor: Decimal,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
            surcharge_factor: default_surcharge_factor(),
        }
    }
}

impl AnalyticsConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Unparsable parameter values fall back to their defaults with a logged
    /// warning; only a broken configuration source itself is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be read.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let raw: RawAnalyticsConfig = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PROJFIN").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(Self::from_strings(
            raw.general_hourly_rate.as_deref(),
            raw.vendor_bill_surcharge_factor.as_deref(),
        ))
    }

    /// Builds a configuration from raw string values.
    ///
    /// A missing or unparsable value falls back to the default for that
    /// parameter and logs a warning. Never fails.
    #[must_use]
    pub fn from_strings(hourly_rate: Option<&str>, surcharge_factor: Option<&str>) -> Self {
        Self {
            hourly_rate: parse_or_default(
                "general_hourly_rate",
                hourly_rate,
                default_hourly_rate(),
            ),
            surcharge_factor: parse_or_default(
                "vendor_bill_surcharge_factor",
                surcharge_factor,
                default_surcharge_factor(),
            ),
        }
    }
}

/// Parses a decimal parameter, substituting the default on failure.
fn parse_or_default(name: &str, raw: Option<&str>, default: Decimal) -> Decimal {
    match raw {
        None => default,
        Some(value) => match Decimal::from_str(value.trim()) {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(
                    parameter = name,
                    value,
                    %default,
                    "invalid configuration value, using default"
                );
                default
            }
        },
    }
}
