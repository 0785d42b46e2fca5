//! # Domain Types
//!
//! Core domain types used throughout Apex Invoice.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │    GstRates     │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, serial     │   │  cgst %         │   │  company name   │       │
//! │  │  rate, quantity │   │  sgst %         │   │  address lines  │       │
//! │  │  amount (derived)│  └─────────────────┘   │  GSTIN, PAN     │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │  Invoice (finalized record handed to PDF / storage layers)     │     │
//! │  │  header + customer + line items + totals + amount in words     │     │
//! │  └───────────────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::line_amount;
use crate::fiscal::FinancialYear;
use crate::money::Paise;
use crate::{DEFAULT_GST_PERCENTAGE, DEFAULT_UNIT};

// =============================================================================
// GST Rates
// =============================================================================

/// The two GST halves applied to an intra-state invoice.
///
/// Each percentage is independent; they are not capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GstRates {
    #[ts(type = "string")]
    pub cgst_percentage: Decimal,
    #[ts(type = "string")]
    pub sgst_percentage: Decimal,
}

impl GstRates {
    pub const fn new(cgst_percentage: Decimal, sgst_percentage: Decimal) -> Self {
        GstRates {
            cgst_percentage,
            sgst_percentage,
        }
    }

    /// No GST at all.
    pub const fn zero() -> Self {
        GstRates::new(Decimal::ZERO, Decimal::ZERO)
    }
}

/// 9% CGST + 9% SGST, the usual rate for solar installation work.
impl Default for GstRates {
    fn default() -> Self {
        let pct = Decimal::from(DEFAULT_GST_PERCENTAGE);
        GstRates::new(pct, pct)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One billed row of an invoice.
///
/// ## Derived Amount
/// `amount` cannot be set directly. Every change to `rate` or `quantity`
/// goes through a setter that recomputes it:
/// ```text
/// amount = round_half_away(rate × quantity × 1000)   (in paise)
/// ```
/// Rates are quoted per kWp while the quantity is billed per watt, hence
/// the fixed factor of 1000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Opaque id, unique within one invoice. Used for UI diffing only.
    pub id: String,

    /// 1-based position, kept dense by the draft.
    pub serial_number: u32,

    pub description: String,

    /// HSN/SAC tax-classification code (may be empty).
    #[serde(default)]
    pub hsn_sac_code: String,

    #[ts(type = "string")]
    rate: Decimal,

    #[ts(type = "string")]
    quantity: Decimal,

    /// Display label only (e.g. "kWp").
    pub unit: String,

    #[serde(with = "crate::money::rupees")]
    #[ts(type = "string")]
    amount: Paise,
}

impl LineItem {
    /// Creates a blank row with zero rate, quantity and amount.
    pub fn new(id: impl Into<String>, serial_number: u32) -> Self {
        LineItem {
            id: id.into(),
            serial_number,
            description: String::new(),
            hsn_sac_code: String::new(),
            rate: Decimal::ZERO,
            quantity: Decimal::ZERO,
            unit: DEFAULT_UNIT.to_string(),
            amount: Paise::zero(),
        }
    }

    /// Builder-style pricing, mostly for tests and seeding.
    pub fn with_pricing(mut self, rate: Decimal, quantity: Decimal) -> Self {
        self.rate = rate;
        self.quantity = quantity;
        self.recompute_amount();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    #[inline]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    #[inline]
    pub fn amount(&self) -> Paise {
        self.amount
    }

    pub fn set_rate(&mut self, rate: Decimal) {
        self.rate = rate;
        self.recompute_amount();
    }

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.recompute_amount();
    }

    /// Brings `amount` back in line with `rate` and `quantity`.
    ///
    /// Needed after deserializing, where the stored amount may be stale.
    pub fn recompute_amount(&mut self) {
        self.amount = line_amount(self.rate, self.quantity);
    }
}

/// A single-field edit to a line item, as sent by the invoice form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum LineItemUpdate {
    Description(String),
    HsnSacCode(String),
    Rate(Decimal),
    Quantity(Decimal),
    Unit(String),
}

// =============================================================================
// Customer
// =============================================================================

/// The billed party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Customer {
    /// Present once the customer has been saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub company_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    /// GSTIN of the customer.
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
}

// =============================================================================
// Invoice
// =============================================================================

/// A finalized invoice record.
///
/// Produced only by [`crate::draft::InvoiceDraft::finalize`], so every
/// total in here is consistent with its line items and already rounded to
/// exactly two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Invoice {
    /// Digits only, e.g. "022".
    pub invoice_number: String,

    #[ts(as = "String")]
    pub financial_year: FinancialYear,

    #[ts(as = "String")]
    pub invoice_date: NaiveDate,

    pub work_order_reference: String,

    #[ts(as = "Option<String>")]
    pub work_order_date: Option<NaiveDate>,

    pub customer: Customer,

    pub line_items: Vec<LineItem>,

    #[serde(with = "crate::money::rupees")]
    #[ts(type = "string")]
    pub total_basic_amount: Paise,

    #[ts(type = "string")]
    pub cgst_percentage: Decimal,

    #[serde(with = "crate::money::rupees")]
    #[ts(type = "string")]
    pub cgst_amount: Paise,

    #[ts(type = "string")]
    pub sgst_percentage: Decimal,

    #[serde(with = "crate::money::rupees")]
    #[ts(type = "string")]
    pub sgst_amount: Paise,

    #[serde(with = "crate::money::rupees")]
    #[ts(type = "string")]
    pub grand_total: Paise,

    pub amount_in_words: String,
}

impl Invoice {
    /// The number printed on the document: `<prefix>/<fy>/<number>`.
    ///
    /// ```rust,ignore
    /// invoice.display_number("AS") // "AS/25-26/022"
    /// ```
    pub fn display_number(&self, prefix: &str) -> String {
        format!(
            "{}/{}/{}",
            prefix,
            self.financial_year,
            self.invoice_number.trim()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_gst_rates_default() {
        let rates = GstRates::default();
        assert_eq!(rates.cgst_percentage, dec!(9));
        assert_eq!(rates.sgst_percentage, dec!(9));
    }

    #[test]
    fn test_new_line_item_is_blank() {
        let item = LineItem::new("a", 1);
        assert_eq!(item.amount(), Paise::zero());
        assert_eq!(item.unit, "kWp");
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_setters_recompute_amount() {
        let mut item = LineItem::new("a", 1);
        item.set_rate(dec!(1.50));
        assert_eq!(item.amount(), Paise::zero());

        item.set_quantity(dec!(35));
        assert_eq!(item.amount().paise(), 5_250_000);

        item.set_rate(dec!(2));
        assert_eq!(item.amount().paise(), 7_000_000);
    }

    #[test]
    fn test_line_item_json_shape() {
        let item = LineItem::new("a", 1)
            .with_description("Rooftop plant")
            .with_pricing(dec!(2.00), dec!(10));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["serialNumber"], 1);
        assert_eq!(json["hsnSacCode"], "");
        assert_eq!(json["amount"], "20000.00");
    }

    #[test]
    fn test_stale_amount_is_recomputed() {
        let json = r#"{
            "id": "x",
            "serialNumber": 1,
            "description": "Panels",
            "rate": 1.5,
            "quantity": 35,
            "unit": "kWp",
            "amount": 1
        }"#;
        let mut item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.amount().paise(), 100);

        item.recompute_amount();
        assert_eq!(item.amount().paise(), 5_250_000);
    }

    #[test]
    fn test_line_item_update_json() {
        let update: LineItemUpdate =
            serde_json::from_str(r#"{"field":"quantity","value":"12.345"}"#).unwrap();
        assert_eq!(update, LineItemUpdate::Quantity(dec!(12.345)));
    }

    #[test]
    fn test_customer_defaults_on_missing_fields() {
        let customer: Customer =
            serde_json::from_str(r#"{"companyName":"Sunrise Pvt Ltd"}"#).unwrap();
        assert_eq!(customer.company_name, "Sunrise Pvt Ltd");
        assert!(customer.address_line1.is_empty());
        assert!(customer.gst_number.is_none());
    }
}
