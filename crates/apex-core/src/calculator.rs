//! # Invoice Totals Calculator
//!
//! Turns line items and GST percentages into a consistent, rounded summary.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  rate × quantity × 1000 ──round──► amount (paise)    (per line item)   │
//! │                                        │                                │
//! │                                        ▼  integer sum                   │
//! │                               total basic (paise)                       │
//! │                          ┌─────────────┴─────────────┐                  │
//! │                          ▼                           ▼                  │
//! │            round(basic × cgst% / 100)   round(basic × sgst% / 100)     │
//! │                          │                           │                  │
//! │                          └─────────────┬─────────────┘                  │
//! │                                        ▼  integer sum                   │
//! │                                  grand total                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every step rounds half away from zero on exact decimals and then adds
//! whole paise, so the printed total always equals the sum of the printed
//! parts. CGST and SGST are rounded separately even when their percentages
//! match; each is a distinct line on the invoice.
//!
//! Nothing here fails. Rejecting bad input (empty descriptions, zero
//! rates) is [`crate::validation`]'s job.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Paise, PAISE_PER_RUPEE};
use crate::types::{GstRates, LineItem};

/// Rates are quoted per kilo-unit (kWp) but billed per base unit (W).
pub const UNIT_CONVERSION_FACTOR: i64 = 1000;

/// Derived summary of an invoice. Recomputed on every read, never stored
/// apart from its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceTotals {
    #[serde(with = "crate::money::rupees")]
    #[ts(type = "string")]
    pub total_basic_amount: Paise,

    #[serde(with = "crate::money::rupees")]
    #[ts(type = "string")]
    pub cgst_amount: Paise,

    #[serde(with = "crate::money::rupees")]
    #[ts(type = "string")]
    pub sgst_amount: Paise,

    #[serde(with = "crate::money::rupees")]
    #[ts(type = "string")]
    pub grand_total: Paise,
}

/// Computes one line amount: `round(rate × quantity × 1000)` in paise.
///
/// ## Example
/// ```rust
/// use apex_core::calculator::line_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Decimal::from_str("1.50").unwrap();
/// let amount = line_amount(rate, Decimal::from(35));
/// assert_eq!(amount.to_string(), "52500.00");
/// ```
///
/// Inputs are expected to be non-negative; no bound is enforced here.
pub fn line_amount(rate: Decimal, quantity: Decimal) -> Paise {
    let factor = Decimal::from(UNIT_CONVERSION_FACTOR * PAISE_PER_RUPEE);
    let raw_paise = rate
        .checked_mul(quantity)
        .and_then(|value| value.checked_mul(factor));

    match raw_paise {
        Some(raw) => Paise::round_raw(raw),
        // Beyond the 96-bit decimal range: saturate.
        None => Paise::round_raw(if rate.is_sign_negative() != quantity.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }),
    }
}

/// Computes the full invoice summary.
///
/// ## Example
/// ```rust
/// use apex_core::calculator::compute_totals;
/// use apex_core::{GstRates, LineItem};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let items = vec![
///     LineItem::new("a", 1).with_pricing(Decimal::from_str("1.50").unwrap(), Decimal::from(35)),
///     LineItem::new("b", 2).with_pricing(Decimal::from(2), Decimal::from(10)),
/// ];
/// let totals = compute_totals(&items, GstRates::default());
///
/// assert_eq!(totals.total_basic_amount.to_string(), "72500.00");
/// assert_eq!(totals.cgst_amount.to_string(), "6525.00");
/// assert_eq!(totals.sgst_amount.to_string(), "6525.00");
/// assert_eq!(totals.grand_total.to_string(), "85550.00");
/// ```
pub fn compute_totals(items: &[LineItem], rates: GstRates) -> InvoiceTotals {
    let total_basic_amount: Paise = items.iter().map(LineItem::amount).sum();
    let cgst_amount = total_basic_amount.percentage(rates.cgst_percentage);
    let sgst_amount = total_basic_amount.percentage(rates.sgst_percentage);

    InvoiceTotals {
        total_basic_amount,
        cgst_amount,
        sgst_amount,
        grand_total: total_basic_amount + cgst_amount + sgst_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(id: &str, rate: Decimal, quantity: Decimal) -> LineItem {
        LineItem::new(id, 1).with_pricing(rate, quantity)
    }

    #[test]
    fn test_line_amount_basic() {
        assert_eq!(line_amount(dec!(1.50), dec!(35)).paise(), 5_250_000);
        assert_eq!(line_amount(dec!(2.00), dec!(10)).paise(), 2_000_000);
        assert_eq!(line_amount(Decimal::ZERO, dec!(10)), Paise::zero());
    }

    #[test]
    fn test_line_amount_three_decimal_quantity() {
        // 0.00001 × 1.005 × 1000 = 0.01005 rupees = 1.005 paise → 1
        assert_eq!(line_amount(dec!(0.00001), dec!(1.005)).paise(), 1);
        // 0.000015 × 1 × 1000 = 0.015 rupees = 1.5 paise → 2 (half away from zero)
        assert_eq!(line_amount(dec!(0.000015), dec!(1)).paise(), 2);
        // 27.5 × 3.333 × 1000 = 91657.5 rupees exactly
        assert_eq!(line_amount(dec!(27.5), dec!(3.333)).paise(), 9_165_750);
    }

    #[test]
    fn test_line_amount_overflow_saturates() {
        assert_eq!(line_amount(Decimal::MAX, Decimal::MAX), Paise::MAX);
    }

    #[test]
    fn test_concrete_scenario() {
        let items = vec![item("a", dec!(1.50), dec!(35)), item("b", dec!(2.00), dec!(10))];
        let totals = compute_totals(&items, GstRates::new(dec!(9), dec!(9)));

        assert_eq!(totals.total_basic_amount.paise(), 7_250_000);
        assert_eq!(totals.cgst_amount.paise(), 652_500);
        assert_eq!(totals.sgst_amount.paise(), 652_500);
        assert_eq!(totals.grand_total.paise(), 8_555_000);
    }

    #[test]
    fn test_empty_items_are_all_zero() {
        let totals = compute_totals(&[], GstRates::default());
        assert_eq!(totals, InvoiceTotals::default());
        assert_eq!(totals.grand_total.to_string(), "0.00");
    }

    #[test]
    fn test_zero_rates() {
        let items = vec![item("a", dec!(3.1), dec!(2))];
        let totals = compute_totals(&items, GstRates::zero());

        assert!(totals.cgst_amount.is_zero());
        assert!(totals.sgst_amount.is_zero());
        assert_eq!(totals.grand_total, totals.total_basic_amount);
    }

    #[test]
    fn test_taxes_are_rounded_independently() {
        // basic = 0.05 rupees = 5 paise
        // cgst 9%  = 0.45 paise → 0
        // sgst 10% = 0.5 paise  → 1
        let items = vec![item("a", dec!(0.00005), dec!(1))];
        let totals = compute_totals(&items, GstRates::new(dec!(9), dec!(10)));

        assert_eq!(totals.total_basic_amount.paise(), 5);
        assert_eq!(totals.cgst_amount.paise(), 0);
        assert_eq!(totals.sgst_amount.paise(), 1);
        assert_eq!(totals.grand_total.paise(), 6);
    }

    #[test]
    fn test_changing_cgst_leaves_sgst_alone() {
        let items = vec![item("a", dec!(1.234), dec!(5.678))];
        let before = compute_totals(&items, GstRates::new(dec!(9), dec!(9)));
        let after = compute_totals(&items, GstRates::new(dec!(14), dec!(9)));

        assert_eq!(before.sgst_amount, after.sgst_amount);
        assert_ne!(before.cgst_amount, after.cgst_amount);
    }

    #[test]
    fn test_sum_of_rounded_parts() {
        // Each line rounds up by half a paise; the total keeps both halves.
        let items = vec![
            item("a", dec!(0.000015), dec!(1)),
            item("b", dec!(0.000015), dec!(1)),
        ];
        let totals = compute_totals(&items, GstRates::zero());
        assert_eq!(totals.total_basic_amount.paise(), 4);
    }

    #[test]
    fn test_totals_json_uses_rupees() {
        let items = vec![item("a", dec!(1.50), dec!(35)), item("b", dec!(2.00), dec!(10))];
        let json = serde_json::to_value(compute_totals(&items, GstRates::default())).unwrap();

        assert_eq!(json["totalBasicAmount"], "72500.00");
        assert_eq!(json["grandTotal"], "85550.00");
    }
}
