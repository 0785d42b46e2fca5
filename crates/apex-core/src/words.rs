//! # Amount in Words
//!
//! Writes a rupee amount the way it is printed on an Indian invoice:
//!
//! ```text
//! 12,34,567.00  →  "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees Only"
//!     85,550.25 →  "Eighty Five Thousand Five Hundred Fifty Rupees and Twenty Five Paise Only"
//!          0.50 →  "Fifty Paise Only"
//!          0.00 →  "Zero Rupees Only"
//! ```
//!
//! ## Indian Grouping
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────┬──────────┬───────────────┐
//! │  Kharab  │   Arab   │  Crore   │   Lakh   │ Thousand │  below 1000   │
//! │   10^11  │   10^9   │   10^7   │   10^5   │   10^3   │               │
//! └──────────┴──────────┴──────────┴──────────┴──────────┴───────────────┘
//! ```
//! Below Kharab each group holds at most 99. Kharab is the last group, so
//! its multiplier may reach 999 ("One Hundred Twenty Five Kharab"); amounts
//! of 1000 Kharab (10^14 rupees) and above are refused.
//!
//! The phrasing has no pluralization: "One Rupees Only" is what gets printed.

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::money::Paise;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Named groups, largest first.
const DENOMINATIONS: [(u64, &str); 5] = [
    (100_000_000_000, "Kharab"),
    (1_000_000_000, "Arab"),
    (10_000_000, "Crore"),
    (100_000, "Lakh"),
    (1_000, "Thousand"),
];

/// Whole rupees must stay below 1000 Kharab.
pub const MAX_RUPEES_IN_WORDS: u64 = 100_000_000_000_000;

/// Writes a decimal rupee amount in words.
///
/// The amount is first rounded to whole paise (half away from zero), so
/// `0.999` reads as "One Rupees Only".
///
/// ## Errors
/// - [`CoreError::NegativeAmount`] for amounts below zero
/// - [`CoreError::AmountTooLarge`] from 10^14 rupees upward
///
/// ## Example
/// ```rust
/// use apex_core::words::amount_in_words;
/// use rust_decimal::Decimal;
///
/// let words = amount_in_words(Decimal::from(1_234_567)).unwrap();
/// assert_eq!(
///     words,
///     "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees Only"
/// );
/// ```
pub fn amount_in_words(amount: Decimal) -> CoreResult<String> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CoreError::NegativeAmount { amount });
    }
    if amount >= Decimal::from(MAX_RUPEES_IN_WORDS) {
        return Err(CoreError::AmountTooLarge { amount });
    }
    paise_in_words(Paise::from_decimal(amount))
}

/// Writes a paise amount in words. See [`amount_in_words`].
pub fn paise_in_words(amount: Paise) -> CoreResult<String> {
    if amount.is_negative() {
        return Err(CoreError::NegativeAmount {
            amount: amount.to_decimal(),
        });
    }

    let rupees = amount.rupees() as u64;
    let paise = amount.paise_part() as u64;

    if rupees >= MAX_RUPEES_IN_WORDS {
        return Err(CoreError::AmountTooLarge {
            amount: amount.to_decimal(),
        });
    }

    if rupees == 0 {
        if paise == 0 {
            return Ok("Zero Rupees Only".to_string());
        }
        return Ok(format!("{} Paise Only", two_digits(paise)));
    }

    let mut words = format!("{} Rupees", rupees_in_words(rupees));
    if paise > 0 {
        words.push_str(" and ");
        words.push_str(&two_digits(paise));
        words.push_str(" Paise");
    }
    words.push_str(" Only");
    Ok(words)
}

/// Whole rupees (> 0) in Indian grouping, without any suffix.
fn rupees_in_words(rupees: u64) -> String {
    let mut groups: Vec<String> = Vec::new();
    let mut remainder = rupees;

    for (value, name) in DENOMINATIONS {
        let count = remainder / value;
        if count > 0 {
            groups.push(format!("{} {}", below_thousand(count), name));
            remainder %= value;
        }
    }

    if remainder > 0 {
        groups.push(below_thousand(remainder));
    }

    groups.join(" ")
}

/// 0..=99. Zero is the empty string.
fn two_digits(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        _ => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{} {}", tens, ONES[ones as usize]),
            }
        }
    }
}

/// 0..=999: two-digit rule below 100, hundreds rule above.
fn below_thousand(n: u64) -> String {
    debug_assert!(n < 1000, "group multiplier {n} out of range");
    if n < 100 {
        return two_digits(n);
    }

    let hundreds = format!("{} Hundred", ONES[(n / 100) as usize]);
    match n % 100 {
        0 => hundreds,
        rest => format!("{} {}", hundreds, two_digits(rest)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
