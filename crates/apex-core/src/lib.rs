//! # apex-core: Pure Invoicing Logic for Apex Invoice
//!
//! This crate is the **heart** of Apex Invoice. It turns the invoice form's
//! line items into GST totals and an amount in words, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Apex Invoice Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Invoice form / apex-invoice CLI                      │   │
//! │  │    Customer ──► Line items ──► GST % ──► Generate               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ apex-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   draft   │  │calculator │  │   words   │  │validation │  │   │
//! │  │   │ add/remove│  │ line amt  │  │ lakh/crore│  │ form rules│  │   │
//! │  │   │ renumber  │  │ CGST/SGST │  │ "… Only"  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │  Invoice record                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           PDF rendering / storage (outside this crate)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Paise` type with integer arithmetic
//! - [`calculator`] - line amounts and invoice totals
//! - [`words`] - amount in Indian-English words
//! - [`draft`] - the editable invoice
//! - [`types`] - line items, customers, GST rates, invoice records
//! - [`fiscal`] - April-to-March financial years
//! - [`validation`] - form rules checked before finalizing
//! - [`error`] - domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use apex_core::calculator::compute_totals;
//! use apex_core::words::paise_in_words;
//! use apex_core::{GstRates, LineItem};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let items = vec![
//!     LineItem::new("1", 1).with_pricing(Decimal::from_str("1.50").unwrap(), Decimal::from(35)),
//!     LineItem::new("2", 2).with_pricing(Decimal::from(2), Decimal::from(10)),
//! ];
//! let totals = compute_totals(&items, GstRates::default());
//!
//! assert_eq!(totals.grand_total.to_string(), "85550.00");
//! assert_eq!(
//!     paise_in_words(totals.grand_total).unwrap(),
//!     "Eighty Five Thousand Five Hundred Fifty Rupees Only"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod draft;
pub mod error;
pub mod fiscal;
pub mod money;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{compute_totals, line_amount, InvoiceTotals};
pub use draft::InvoiceDraft;
pub use error::{CoreError, CoreResult, ValidationError};
pub use fiscal::FinancialYear;
pub use money::Paise;
pub use types::*;
pub use words::{amount_in_words, paise_in_words};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// CGST and SGST percentage a new draft starts with.
pub const DEFAULT_GST_PERCENTAGE: u32 = 9;

/// Unit label on a new line item.
pub const DEFAULT_UNIT: &str = "kWp";

/// Prefix of the printed invoice number (`AS/25-26/022`).
pub const DEFAULT_INVOICE_PREFIX: &str = "AS";
