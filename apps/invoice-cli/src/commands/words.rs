//! Stand-alone helpers: amount in words and financial year lookup.

use std::str::FromStr;

use apex_core::{amount_in_words, FinancialYear, Paise};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::ConfigState;
use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsResponse {
    /// The amount rounded to paise, as used for the words.
    #[serde(with = "apex_core::money::rupees")]
    pub amount: Paise,
    pub formatted: String,
    pub words: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialYearResponse {
    pub financial_year: FinancialYear,
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
}

/// Writes a rupee amount (e.g. `85550` or `0.50`) in Indian English.
pub fn words(config: &ConfigState, raw: &str) -> CliResult<WordsResponse> {
    let amount = Decimal::from_str(raw.trim())
        .map_err(|_| CliError::InvalidAmount(raw.to_string()))?;
    let words = amount_in_words(amount)?;
    let amount = Paise::from_decimal(amount);

    Ok(WordsResponse {
        formatted: config.format_currency(amount),
        amount,
        words,
    })
}

/// The financial year (April to March) a date falls in.
pub fn financial_year(date: NaiveDate) -> FinancialYearResponse {
    let financial_year = FinancialYear::containing(date);
    FinancialYearResponse {
        financial_year,
        first_day: financial_year.first_day(),
        last_day: financial_year.last_day(),
    }
}
