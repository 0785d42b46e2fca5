//! # Money Module
//!
//! Provides the `Paise` type for handling rupee amounts safely.
//!
//! ## Why Integer Paise?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    1.005 * 100 = 100.49999999999999  → rounds to 1.00  ❌               │
//! │                                                                         │
//! │  Summing rounded line amounts as floats drifts away from the sum of    │
//! │  the printed values after a few dozen lines.                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    Inputs are exact decimals; every rounding step lands on a whole     │
//! │    paise count (i64) and all sums happen on integers.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Convention
//! Every rounding in this crate is **round half away from zero**:
//! 0.5 paise → 1 paise, 2.5 paise → 3 paise.
//!
//! ## Usage
//! ```rust
//! use apex_core::money::Paise;
//! use rust_decimal::Decimal;
//!
//! let basic = Paise::from_paise(7_250_000); // ₹72,500.00
//! let cgst = basic.percentage(Decimal::from(9));
//! assert_eq!(cgst.paise(), 652_500);        // ₹6,525.00
//! assert_eq!(cgst.to_string(), "6525.00");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use tracing::warn;
use ts_rs::TS;

/// Number of paise in one rupee.
pub const PAISE_PER_RUPEE: i64 = 100;

// =============================================================================
// Paise Type
// =============================================================================

/// A rupee amount held as a whole number of paise.
///
/// ## Where Paise is Used
/// ```text
/// LineItem.rate × quantity × 1000 ──► LineItem.amount ──┐
///                                                       ▼
///                        InvoiceTotals.total_basic_amount ──► CGST / SGST
///                                                       │
///                                                       ▼
///                        InvoiceTotals.grand_total ──► amount in words
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Paise(i64);

impl Paise {
    /// Largest representable amount; saturated arithmetic lands here.
    pub const MAX: Paise = Paise(i64::MAX);

    /// Creates an amount from a paise count.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Paise(paise)
    }

    /// Creates an amount from whole rupees and paise, saturating at the
    /// ends of the `i64` range.
    ///
    /// ```rust
    /// use apex_core::money::Paise;
    ///
    /// assert_eq!(Paise::from_rupees_paise(85_550, 0).paise(), 8_555_000);
    /// assert_eq!(Paise::from_rupees_paise(0, 50).paise(), 50);
    /// ```
    #[inline]
    pub const fn from_rupees_paise(rupees: i64, paise: i64) -> Self {
        Paise(rupees.saturating_mul(PAISE_PER_RUPEE).saturating_add(paise))
    }

    /// Rounds a decimal rupee amount to the nearest paise (half away from zero).
    ///
    /// ```rust
    /// use apex_core::money::Paise;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let amount = Decimal::from_str("10.005").unwrap();
    /// assert_eq!(Paise::from_decimal(amount).paise(), 1001);
    /// ```
    pub fn from_decimal(rupees: Decimal) -> Self {
        match rupees.checked_mul(Decimal::ONE_HUNDRED) {
            Some(raw) => Paise::round_raw(raw),
            None => Paise::saturated(rupees.is_sign_negative(), rupees),
        }
    }

    /// Rounds a fractional paise count to a whole paise (half away from zero).
    ///
    /// This is the single rounding point every calculation funnels through.
    pub fn round_raw(raw_paise: Decimal) -> Self {
        let rounded = raw_paise.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        match rounded.to_i64() {
            Some(paise) => Paise(paise),
            None => Paise::saturated(raw_paise.is_sign_negative(), raw_paise),
        }
    }

    fn saturated(negative: bool, value: Decimal) -> Self {
        warn!(%value, "amount outside the paise range, saturating");
        if negative {
            Paise(i64::MIN)
        } else {
            Paise::MAX
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % PAISE_PER_RUPEE).abs()
    }

    /// Returns the amount as a rupee decimal with exactly two decimal places.
    ///
    /// ```rust
    /// use apex_core::money::Paise;
    ///
    /// assert_eq!(Paise::from_paise(8_555_000).to_decimal().to_string(), "85550.00");
    /// assert_eq!(Paise::zero().to_decimal().to_string(), "0.00");
    /// ```
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Paise(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage and rounds the result to whole paise.
    ///
    /// ## Formula
    /// `round(paise × percentage / 100)`, computed on exact decimals.
    ///
    /// ```rust
    /// use apex_core::money::Paise;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// // ₹0.50 at 9% = 4.5 paise → 5 paise
    /// let half_rupee = Paise::from_paise(50);
    /// assert_eq!(half_rupee.percentage(Decimal::from(9)).paise(), 5);
    ///
    /// // Fractional percentages are exact too
    /// let pct = Decimal::from_str("2.5").unwrap();
    /// assert_eq!(Paise::from_paise(1000).percentage(pct).paise(), 25);
    /// ```
    pub fn percentage(&self, percentage: Decimal) -> Paise {
        match Decimal::from(self.0).checked_mul(percentage) {
            Some(scaled) => Paise::round_raw(scaled / Decimal::ONE_HUNDRED),
            None => Paise::saturated(
                self.is_negative() != percentage.is_sign_negative(),
                percentage,
            ),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Bare numeric rendering with two decimals (`85550.00`).
///
/// Currency symbols and digit grouping belong to the presentation layer.
impl fmt::Display for Paise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.rupees().unsigned_abs(), self.paise_part())
    }
}

impl Default for Paise {
    fn default() -> Self {
        Paise::zero()
    }
}

impl Add for Paise {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Paise(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Paise {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Paise {
    fn sum<I: Iterator<Item = Paise>>(iter: I) -> Self {
        iter.fold(Paise::zero(), |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a Paise> for Paise {
    fn sum<I: Iterator<Item = &'a Paise>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Serde Helper
// =============================================================================

/// Serializes a [`Paise`] field as a two-decimal rupee value.
///
/// Stored invoice records carry rupee amounts (`"85550.00"`), not paise
/// counts. Use with `#[serde(with = "crate::money::rupees")]`.
pub mod rupees {
    use super::Paise;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(amount: &Paise, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&amount.to_decimal(), serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Paise, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rupees = <Decimal as Deserialize>::deserialize(deserializer)?;
        Ok(Paise::from_decimal(rupees))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
