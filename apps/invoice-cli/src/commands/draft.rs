//! # Draft Commands
//!
//! Commands that edit a draft file in place.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Blank   │────►│ Editing  │────►│  Totals  │────►│ Finalized│       │
//! │  │  Draft   │     │          │     │  Review  │     │ Invoice  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │   new_draft            │                              finalize          │
//! │                   add_item                          (invoice.rs)        │
//! │                   update_item                                           │
//! │                   remove_item                                           │
//! │                   set_header / set_customer                             │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   reset ─────────────────────────────►                  │
//! │                                                      (back to blank)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command loads the file, applies one change through
//! [`InvoiceDraft`], saves it back and answers with the updated draft and
//! its totals. A failed change leaves the file untouched.

use std::fs;
use std::path::Path;

use apex_core::{Customer, FinancialYear, GstRates, InvoiceDraft, LineItemUpdate};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::commands::DraftResponse;
use crate::config::ConfigState;
use crate::error::{CliError, CliResult};
use crate::store::{load_draft, save_draft};

/// Optional line item fields, applied in the order the form lays them out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub description: Option<String>,
    pub hsn_sac_code: Option<String>,
    pub rate: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub unit: Option<String>,
}

impl ItemFields {
    /// Turns the given fields into single-field updates.
    fn into_updates(self) -> Vec<LineItemUpdate> {
        [
            self.description.map(LineItemUpdate::Description),
            self.hsn_sac_code.map(LineItemUpdate::HsnSacCode),
            self.rate.map(LineItemUpdate::Rate),
            self.quantity.map(LineItemUpdate::Quantity),
            self.unit.map(LineItemUpdate::Unit),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Invoice header fields; `None` leaves the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub work_order_reference: Option<String>,
    pub work_order_date: Option<NaiveDate>,
    pub cgst_percentage: Option<Decimal>,
    pub sgst_percentage: Option<Decimal>,
}

/// Creates a blank draft file.
///
/// ## Arguments
/// * `date` - Invoice date; also decides the financial year
/// * `out` - File to create; an existing file is replaced
pub fn new_draft(config: &ConfigState, date: NaiveDate, out: &Path) -> CliResult<DraftResponse> {
    let mut draft = InvoiceDraft::new(date);
    draft.set_gst_rates(config.default_gst)?;

    save_draft(out, &draft)?;
    info!(path = %out.display(), fy = %draft.financial_year, "draft created");

    Ok(DraftResponse::new(config, draft))
}

/// Appends a line item, optionally filling it in straight away.
pub fn add_item(config: &ConfigState, path: &Path, fields: ItemFields) -> CliResult<DraftResponse> {
    edit(config, path, |draft| {
        let id = draft.add_line_item();
        fields
            .into_updates()
            .into_iter()
            .try_for_each(|update| draft.update_line_item(&id, update))?;
        Ok(())
    })
}

/// Edits the given fields of one line item.
///
/// ## Behavior
/// - Fields are applied one at a time; the first refused field aborts the
///   whole command and nothing is saved
/// - Rate or quantity changes recompute the line amount
pub fn update_item(
    config: &ConfigState,
    path: &Path,
    id: &str,
    fields: ItemFields,
) -> CliResult<DraftResponse> {
    edit(config, path, |draft| {
        fields
            .into_updates()
            .into_iter()
            .try_for_each(|update| draft.update_line_item(id, update))?;
        Ok(())
    })
}

/// Removes a line item; the remaining rows are renumbered.
pub fn remove_item(config: &ConfigState, path: &Path, id: &str) -> CliResult<DraftResponse> {
    edit(config, path, |draft| Ok(draft.remove_line_item(id)?))
}

/// Updates invoice number, dates and GST percentages.
///
/// A new invoice date moves the draft into that date's financial year.
pub fn set_header(
    config: &ConfigState,
    path: &Path,
    fields: HeaderFields,
) -> CliResult<DraftResponse> {
    edit(config, path, |draft| {
        if let Some(number) = fields.invoice_number {
            draft.invoice_number = number;
        }
        if let Some(date) = fields.invoice_date {
            draft.invoice_date = date;
            draft.financial_year = FinancialYear::containing(date);
        }
        if let Some(reference) = fields.work_order_reference {
            draft.work_order_reference = reference;
        }
        if fields.work_order_date.is_some() {
            draft.work_order_date = fields.work_order_date;
        }

        let current = draft.gst_rates();
        let rates = GstRates::new(
            fields.cgst_percentage.unwrap_or(current.cgst_percentage),
            fields.sgst_percentage.unwrap_or(current.sgst_percentage),
        );
        if rates != current {
            draft.set_gst_rates(rates)?;
        }
        Ok(())
    })
}

/// Copies a customer record (JSON file) onto the draft.
pub fn set_customer(
    config: &ConfigState,
    path: &Path,
    customer_path: &Path,
) -> CliResult<DraftResponse> {
    let raw = fs::read_to_string(customer_path).map_err(|e| CliError::io(customer_path, e))?;
    let customer: Customer =
        serde_json::from_str(&raw).map_err(|e| CliError::invalid_json(customer_path, e))?;

    edit(config, path, |draft| {
        draft.select_customer(&customer);
        Ok(())
    })
}

/// Throws the draft away and starts a blank one in the same file.
pub fn reset(config: &ConfigState, path: &Path, date: NaiveDate) -> CliResult<DraftResponse> {
    edit(config, path, |draft| {
        draft.reset(date);
        Ok(draft.set_gst_rates(config.default_gst)?)
    })
}

/// Load, change, save.
fn edit<F>(config: &ConfigState, path: &Path, change: F) -> CliResult<DraftResponse>
where
    F: FnOnce(&mut InvoiceDraft) -> CliResult<()>,
{
    let mut draft = load_draft(path)?;
    change(&mut draft)?;
    save_draft(path, &draft)?;

    debug!(path = %path.display(), items = draft.line_items().len(), "draft edited");
    Ok(DraftResponse::new(config, draft))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apex_core::CoreError;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
    }

    fn setup() -> (TempDir, PathBuf, ConfigState) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.json");
        let config = ConfigState::default();
        new_draft(&config, date(), &path).unwrap();
        (dir, path, config)
    }

    fn priced(description: &str, rate: Decimal, quantity: Decimal) -> ItemFields {
        ItemFields {
            description: Some(description.to_string()),
            rate: Some(rate),
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_draft_uses_config_rates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.json");
        let config = ConfigState {
            default_gst: GstRates::new(dec!(2.5), dec!(2.5)),
            ..Default::default()
        };

        let response = new_draft(&config, date(), &path).unwrap();

        assert_eq!(response.draft.gst_rates(), config.default_gst);
        assert_eq!(load_draft(&path).unwrap(), response.draft);
    }

    #[test]
    fn test_add_and_update_items() {
        let (_dir, path, config) = setup();
        let first = load_draft(&path).unwrap().line_items()[0].id.clone();

        update_item(&config, &path, &first, priced("Rooftop plant", dec!(1.50), dec!(35))).unwrap();
        let response = add_item(&config, &path, priced("Net metering", dec!(2), dec!(10))).unwrap();

        assert_eq!(response.draft.line_items().len(), 2);
        assert_eq!(response.draft.line_items()[1].serial_number, 2);
        assert_eq!(response.totals.totals.grand_total.paise(), 8_555_000);
        assert_eq!(response.totals.formatted.grand_total, "₹ 85,550.00");
    }

    #[test]
    fn test_refused_update_leaves_file_untouched() {
        let (_dir, path, config) = setup();
        let id = load_draft(&path).unwrap().line_items()[0].id.clone();
        update_item(&config, &path, &id, priced("Panels", dec!(2), dec!(1))).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let fields = ItemFields {
            description: Some("Changed".to_string()),
            rate: Some(dec!(-1)),
            ..Default::default()
        };
        let err = update_item(&config, &path, &id, fields).unwrap_err();

        assert!(matches!(err, CliError::Core(CoreError::Validation(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_remove_item() {
        let (_dir, path, config) = setup();
        add_item(&config, &path, ItemFields::default()).unwrap();
        let response = add_item(&config, &path, ItemFields::default()).unwrap();
        let middle = response.draft.line_items()[1].id.clone();
        let last = response.draft.line_items()[2].id.clone();

        let response = remove_item(&config, &path, &middle).unwrap();

        let serials: Vec<u32> = response.draft.line_items().iter().map(|i| i.serial_number).collect();
        assert_eq!(serials, vec![1, 2]);
        assert_eq!(response.draft.line_item(&last).unwrap().serial_number, 2);
    }

    #[test]
    fn test_remove_last_item_is_refused() {
        let (_dir, path, config) = setup();
        let only = load_draft(&path).unwrap().line_items()[0].id.clone();

        let err = remove_item(&config, &path, &only).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::LastLineItem)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_set_header_moves_financial_year() {
        let (_dir, path, config) = setup();
        let fields = HeaderFields {
            invoice_number: Some("022".to_string()),
            invoice_date: NaiveDate::from_ymd_opt(2026, 3, 31),
            sgst_percentage: Some(dec!(6)),
            ..Default::default()
        };

        let response = set_header(&config, &path, fields).unwrap();

        assert_eq!(response.draft.invoice_number, "022");
        assert_eq!(response.draft.financial_year.to_string(), "25-26");
        assert_eq!(response.draft.gst_rates(), GstRates::new(dec!(9), dec!(6)));

        let fields = HeaderFields {
            invoice_date: NaiveDate::from_ymd_opt(2026, 4, 1),
            ..Default::default()
        };
        let response = set_header(&config, &path, fields).unwrap();
        assert_eq!(response.draft.financial_year.to_string(), "26-27");
    }

    #[test]
    fn test_set_customer() {
        let (dir, path, config) = setup();
        let customer_path = dir.path().join("customer.json");
        fs::write(
            &customer_path,
            r#"{"id":"c-1","companyName":"Sunrise Agro Pvt Ltd","addressLine1":"12 Lake Road","gstNumber":"27AAAAA0000A1Z5"}"#,
        )
        .unwrap();

        let response = set_customer(&config, &path, &customer_path).unwrap();

        assert_eq!(response.draft.customer.company_name, "Sunrise Agro Pvt Ltd");
        assert_eq!(response.draft.customer.gst_number.as_deref(), Some("27AAAAA0000A1Z5"));
    }

    #[test]
    fn test_reset() {
        let (_dir, path, config) = setup();
        add_item(&config, &path, priced("Panels", dec!(2), dec!(1))).unwrap();

        let response = reset(&config, &path, date()).unwrap();

        assert_eq!(response.draft.line_items().len(), 1);
        assert!(response.totals.totals.grand_total.is_zero());
    }
}
