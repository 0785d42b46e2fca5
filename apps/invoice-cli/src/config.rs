//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`APEX_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup and passed by reference into
//! each command.

use apex_core::{GstRates, Paise, DEFAULT_INVOICE_PREFIX};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Printed before the financial year in invoice numbers (`AS/25-26/022`)
    pub invoice_prefix: String,

    /// Currency symbol for display
    pub currency_symbol: String,

    /// GST percentages new drafts start with
    pub default_gst: GstRates,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Prefix: "AS"
    /// - Currency: ₹
    /// - GST: 9% CGST + 9% SGST
    fn default() -> Self {
        ConfigState {
            invoice_prefix: DEFAULT_INVOICE_PREFIX.to_string(),
            currency_symbol: "₹".to_string(),
            default_gst: GstRates::default(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `APEX_INVOICE_PREFIX`: Override invoice number prefix
    /// - `APEX_CURRENCY_SYMBOL`: Override currency symbol
    /// - `APEX_CGST_PERCENTAGE`: Default CGST (e.g. "9")
    /// - `APEX_SGST_PERCENTAGE`: Default SGST (e.g. "9")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an explicit variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(prefix) = var("APEX_INVOICE_PREFIX") {
            config.invoice_prefix = prefix;
        }

        if let Some(symbol) = var("APEX_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = var("APEX_CGST_PERCENTAGE") {
            config.default_gst.cgst_percentage = parse_percentage("APEX_CGST_PERCENTAGE", &raw)?;
        }

        if let Some(raw) = var("APEX_SGST_PERCENTAGE") {
            config.default_gst.sgst_percentage = parse_percentage("APEX_SGST_PERCENTAGE", &raw)?;
        }

        Ok(config)
    }

    /// Formats an amount with the currency symbol and Indian digit grouping.
    ///
    /// ## Example
    /// ```rust
    /// use apex_invoice::config::ConfigState;
    /// use apex_core::Paise;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Paise::from_paise(123_456_789)), "₹ 12,34,567.89");
    /// ```
    pub fn format_currency(&self, amount: Paise) -> String {
        format!(
            "{}{} {}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            group_indian(amount.rupees().unsigned_abs()),
            amount.paise_part()
        )
    }
}

/// `1234567` → `12,34,567`: last three digits, then pairs.
fn group_indian(rupees: u64) -> String {
    let digits = rupees.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn parse_percentage(key: &str, raw: &str) -> Result<Decimal, ConfigError> {
    let value = Decimal::from_str(raw.trim())
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }
    Ok(value)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
