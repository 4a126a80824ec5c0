//! # Configuration State
//!
//! Presentation settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags
//! 2. Environment variables (`TABSPLIT_*`)
//! 3. Defaults (this file)
//!
//! The tax rate is deliberately absent: it is fixed in `tabsplit-core`.

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use tabsplit_core::validation::parse_percent;
use tabsplit_core::{Money, Rate};
use thiserror::Error;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Table,

    /// The `SplitReport` as JSON (amounts in cents).
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(ENV_FORMAT.to_string())),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Tip used when none is given
    pub default_tip: Rate,

    /// Report format
    pub format: OutputFormat,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

pub const ENV_CURRENCY_SYMBOL: &str = "TABSPLIT_CURRENCY_SYMBOL";
pub const ENV_DEFAULT_TIP: &str = "TABSPLIT_DEFAULT_TIP";
pub const ENV_FORMAT: &str = "TABSPLIT_FORMAT";

impl Default for AppConfig {
    /// ## Default Values
    /// - Currency: `$`
    /// - Tip: 0%
    /// - Format: table
    fn default() -> Self {
        AppConfig {
            currency_symbol: "$".to_string(),
            default_tip: Rate::zero(),
            format: OutputFormat::Table,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables over the defaults.
    ///
    /// ## Environment Variables
    /// - `TABSPLIT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TABSPLIT_DEFAULT_TIP`: Default tip percent (e.g., "15")
    /// - `TABSPLIT_FORMAT`: `table` or `json`
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// Split out from [`AppConfig::load`] so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        // Unlike user input during a session, a bad config value is an error.
        if let Some(tip) = lookup(ENV_DEFAULT_TIP) {
            config.default_tip = parse_percent(&tip, "default tip")
                .map_err(|_| ConfigError::InvalidValue(ENV_DEFAULT_TIP.to_string()))?;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.parse()?;
        }

        Ok(config)
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_cli::state::AppConfig;
    /// use tabsplit_core::Money;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }

    /// Formats an entered amount, rounded to the cent, with the configured
    /// symbol.
    ///
    /// Amounts too large for [`Money`] are shown as typed.
    pub fn format_amount(&self, amount: Decimal) -> String {
        match Money::from_amount(amount) {
            Some(money) => self.format_currency(money),
            None => format!("{}{}", self.currency_symbol, amount),
        }
    }
}
