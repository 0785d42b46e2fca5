//! # Financial Year
//!
//! Indian financial years run from April 1 to March 31 and are written with
//! two-digit years: the year starting 1 April 2025 is `25-26`.
//!
//! ```text
//!   Jan  Feb  Mar │ Apr  May  ...  Dec │ Jan  Feb  Mar │ Apr
//!   ── 24-25 ─────┼────── 25-26 ───────┴───────────────┼ 26-27
//! ```
//!
//! The label is part of every invoice number (`AS/25-26/022`).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// First month of the financial year.
const FIRST_MONTH: u32 = 4;

/// A financial year, identified by the calendar year it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FinancialYear {
    start_year: i32,
}

impl FinancialYear {
    /// The financial year starting in April of `start_year`.
    pub const fn starting(start_year: i32) -> Self {
        FinancialYear { start_year }
    }

    /// The financial year a date falls in.
    ///
    /// ```rust
    /// use apex_core::fiscal::FinancialYear;
    /// use chrono::NaiveDate;
    ///
    /// let march = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
    /// let april = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
    /// assert_eq!(FinancialYear::containing(march).to_string(), "25-26");
    /// assert_eq!(FinancialYear::containing(april).to_string(), "26-27");
    /// ```
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= FIRST_MONTH {
            FinancialYear::starting(date.year())
        } else {
            FinancialYear::starting(date.year() - 1)
        }
    }

    pub const fn start_year(&self) -> i32 {
        self.start_year
    }

    /// 1 April of the start year.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start_year, FIRST_MONTH, 1)
    }

    /// 31 March of the following year.
    pub fn last_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start_year + 1, FIRST_MONTH - 1, 31)
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}",
            self.start_year.rem_euclid(100),
            (self.start_year + 1).rem_euclid(100)
        )
    }
}

/// Parses the `YY-YY` label. Two-digit years are read as 20YY.
impl FromStr for FinancialYear {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "financial year".to_string(),
            reason: reason.to_string(),
        };

        let (first, second) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| invalid("expected YY-YY"))?;

        if first.len() != 2 || second.len() != 2 {
            return Err(invalid("expected YY-YY"));
        }

        let first: i32 = first.parse().map_err(|_| invalid("years must be digits"))?;
        let second: i32 = second.parse().map_err(|_| invalid("years must be digits"))?;

        if (first + 1) % 100 != second {
            return Err(invalid("years must be consecutive"));
        }

        Ok(FinancialYear::starting(2000 + first))
    }
}

impl TryFrom<String> for FinancialYear {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FinancialYear> for String {
    fn from(year: FinancialYear) -> Self {
        year.to_string()
    }
}
