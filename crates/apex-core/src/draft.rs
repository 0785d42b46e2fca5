//! # Invoice Draft
//!
//! The editable invoice behind the form. Every edit keeps the draft's
//! invariants; totals are derived on demand and never stored.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Operations                                     │
//! │                                                                         │
//! │  Form Action              Draft Method             Effect               │
//! │  ───────────              ────────────             ──────               │
//! │                                                                         │
//! │  Click "Add Item" ──────► add_line_item() ──────► push blank row,      │
//! │                                                   serial = len + 1      │
//! │                                                                         │
//! │  Edit a cell ───────────► update_line_item() ───► rate / quantity      │
//! │                                                   recompute amount      │
//! │                                                                         │
//! │  Click remove ──────────► remove_line_item() ───► drop row,            │
//! │                                                   renumber 1..N         │
//! │                                                                         │
//! │  Any render ────────────► totals() ─────────────► (read only)          │
//! │                                                                         │
//! │  Click "Generate" ──────► finalize() ───────────► validate, build      │
//! │                                                   Invoice record        │
//! │                                                                         │
//! │  Click "Reset" ─────────► reset() ──────────────► one blank row,       │
//! │                                                   9% / 9%               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At least one line item, serials dense `1..=N` in list order
//! - Every line's amount matches its rate and quantity
//! - No negative rate, quantity or GST percentage gets in through an update

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::calculator::{compute_totals, InvoiceTotals};
use crate::error::{CoreError, CoreResult};
use crate::fiscal::FinancialYear;
use crate::types::{Customer, GstRates, Invoice, LineItem, LineItemUpdate};
use crate::validation::{
    validate_customer, validate_gst_rates, validate_invoice_number, validate_line_item_pricing,
    validate_line_items, validate_non_negative, ValidationResult,
};
use crate::words::paise_in_words;

/// An invoice being composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceDraft {
    #[serde(default)]
    pub invoice_number: String,

    #[ts(as = "String")]
    pub financial_year: FinancialYear,

    #[ts(as = "String")]
    pub invoice_date: NaiveDate,

    #[serde(default)]
    pub work_order_reference: String,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub work_order_date: Option<NaiveDate>,

    #[serde(default)]
    pub customer: Customer,

    line_items: Vec<LineItem>,

    #[serde(flatten)]
    gst: GstRates,
}

impl InvoiceDraft {
    /// Creates an empty draft dated `today`: one blank row, 9% CGST, 9% SGST.
    pub fn new(today: NaiveDate) -> Self {
        InvoiceDraft {
            invoice_number: String::new(),
            financial_year: FinancialYear::containing(today),
            invoice_date: today,
            work_order_reference: String::new(),
            work_order_date: None,
            customer: Customer::default(),
            line_items: vec![LineItem::new(new_item_id(), 1)],
            gst: GstRates::default(),
        }
    }

    /// Returns the line items in display order.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Finds a line item by id.
    pub fn line_item(&self, id: &str) -> Option<&LineItem> {
        self.line_items.iter().find(|i| i.id == id)
    }

    pub fn gst_rates(&self) -> GstRates {
        self.gst
    }

    /// Replaces both GST percentages.
    ///
    /// ## Returns
    /// - `Err` if either percentage is negative; the draft is left unchanged
    pub fn set_gst_rates(&mut self, rates: GstRates) -> ValidationResult<()> {
        validate_gst_rates(&rates)?;
        debug!(cgst = %rates.cgst_percentage, sgst = %rates.sgst_percentage, "gst rates updated");
        self.gst = rates;
        Ok(())
    }

    /// Copies a saved customer onto the invoice.
    pub fn select_customer(&mut self, customer: &Customer) {
        debug!(company = %customer.company_name, "customer selected");
        self.customer = customer.clone();
    }

    /// Appends a blank row and returns its id.
    pub fn add_line_item(&mut self) -> String {
        let id = new_item_id();
        let serial = self.next_serial();
        self.line_items.push(LineItem::new(id.clone(), serial));
        debug!(%id, serial, "line item added");
        id
    }

    /// Applies a single-field edit to a row.
    ///
    /// ## Behavior
    /// - Rate and quantity edits recompute the row's amount
    /// - Negative rate or quantity is refused and the row stays as it was
    pub fn update_line_item(&mut self, id: &str, update: LineItemUpdate) -> CoreResult<()> {
        let item = self
            .line_items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::LineItemNotFound(id.to_string()))?;

        match update {
            LineItemUpdate::Description(description) => item.description = description,
            LineItemUpdate::HsnSacCode(code) => item.hsn_sac_code = code,
            LineItemUpdate::Unit(unit) => item.unit = unit,
            LineItemUpdate::Rate(rate) => {
                validate_non_negative("rate", rate)?;
                item.set_rate(rate);
            }
            LineItemUpdate::Quantity(quantity) => {
                validate_non_negative("quantity", quantity)?;
                item.set_quantity(quantity);
            }
        }

        debug!(%id, amount = %item.amount(), "line item updated");
        Ok(())
    }

    /// Removes a row and renumbers the rest `1..=N`.
    ///
    /// ## Returns
    /// - `Err(LineItemNotFound)` for an unknown id
    /// - `Err(LastLineItem)` if this is the only row left
    pub fn remove_line_item(&mut self, id: &str) -> CoreResult<()> {
        let index = self
            .line_items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::LineItemNotFound(id.to_string()))?;

        if self.line_items.len() == 1 {
            return Err(CoreError::LastLineItem);
        }

        self.line_items.remove(index);
        self.renumber();
        debug!(%id, remaining = self.line_items.len(), "line item removed");
        Ok(())
    }

    /// Re-establishes every invariant after loading a stored draft:
    /// serials, amounts, and the one-row minimum.
    ///
    /// ## Returns
    /// - `Err` if a stored GST percentage, rate or quantity is negative;
    ///   the draft is left unchanged
    pub fn refresh(&mut self) -> ValidationResult<()> {
        validate_gst_rates(&self.gst)?;
        self.line_items.iter().try_for_each(validate_line_item_pricing)?;

        if self.line_items.is_empty() {
            self.line_items.push(LineItem::new(new_item_id(), 1));
        }
        self.renumber();
        self.line_items.iter_mut().for_each(LineItem::recompute_amount);
        Ok(())
    }

    /// Current totals; recomputed on every call.
    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(&self.line_items, self.gst)
    }

    /// Checks the draft in form order and reports the first problem.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_invoice_number(&self.invoice_number)?;
        validate_customer(&self.customer)?;
        validate_line_items(&self.line_items)?;
        validate_gst_rates(&self.gst)
    }

    /// Validates the draft and builds the invoice record.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Generate Invoice"
    ///      │
    ///      ▼
    /// finalize() ← THIS FUNCTION
    ///      │
    ///      ├── invalid? → ValidationError shown to the user
    ///      │
    ///      └── Invoice { totals, amount_in_words, .. } → PDF + storage
    /// ```
    pub fn finalize(&self) -> CoreResult<Invoice> {
        self.validate()?;

        let totals = self.totals();
        let amount_in_words = paise_in_words(totals.grand_total)?;

        debug!(
            invoice_number = %self.invoice_number,
            grand_total = %totals.grand_total,
            "invoice finalized"
        );

        Ok(Invoice {
            invoice_number: self.invoice_number.trim().to_string(),
            financial_year: self.financial_year,
            invoice_date: self.invoice_date,
            work_order_reference: self.work_order_reference.clone(),
            work_order_date: self.work_order_date,
            customer: self.customer.clone(),
            line_items: self.line_items.clone(),
            total_basic_amount: totals.total_basic_amount,
            cgst_percentage: self.gst.cgst_percentage,
            cgst_amount: totals.cgst_amount,
            sgst_percentage: self.gst.sgst_percentage,
            sgst_amount: totals.sgst_amount,
            grand_total: totals.grand_total,
            amount_in_words,
        })
    }

    /// Discards everything and starts over as [`InvoiceDraft::new`].
    pub fn reset(&mut self, today: NaiveDate) {
        *self = InvoiceDraft::new(today);
        debug!("draft reset");
    }

    fn next_serial(&self) -> u32 {
        self.line_items.len() as u32 + 1
    }

    fn renumber(&mut self) {
        for (index, item) in self.line_items.iter_mut().enumerate() {
            item.serial_number = index as u32 + 1;
        }
    }
}

fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
