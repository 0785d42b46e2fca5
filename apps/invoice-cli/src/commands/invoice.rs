//! # Invoice Commands
//!
//! Read-only views of a draft and the final "Generate Invoice" step.

use std::path::Path;

use apex_core::{paise_in_words, Invoice};
use serde::Serialize;
use tracing::{info, warn};

use crate::commands::TotalsView;
use crate::config::ConfigState;
use crate::error::CliResult;
use crate::store::{load_draft, write_json};

/// Totals block as printed under the line items, with the words line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResponse {
    #[serde(flatten)]
    pub totals: TotalsView,
    /// `None` when the grand total is too large to be written in words.
    pub amount_in_words: Option<String>,
}

/// A finalized invoice with its printed number.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeResponse {
    /// e.g. `AS/25-26/022`
    pub display_number: String,
    pub invoice: Invoice,
}

/// Computes the totals of a draft without validating it.
///
/// Works on incomplete drafts too; an all-blank draft totals to zero.
/// A total beyond the words table still reports its numbers.
pub fn totals(config: &ConfigState, path: &Path) -> CliResult<TotalsResponse> {
    let draft = load_draft(path)?;
    let totals = draft.totals();

    let amount_in_words = match paise_in_words(totals.grand_total) {
        Ok(words) => Some(words),
        Err(err) => {
            warn!(error = %err, grand_total = %totals.grand_total, "no amount in words");
            None
        }
    };

    Ok(TotalsResponse {
        amount_in_words,
        totals: TotalsView::new(config, totals),
    })
}

/// Validates the draft and produces the invoice record.
///
/// ## User Workflow
/// ```text
/// apex-invoice finalize --draft draft.json --out invoice-022.json
///      │
///      ├── load + refresh draft
///      ├── validate (first failing rule is reported, exit code 2)
///      ├── totals + amount in words
///      │
///      └── Invoice JSON → stdout, and to --out when given
/// ```
///
/// The draft file itself is not modified.
pub fn finalize(
    config: &ConfigState,
    path: &Path,
    out: Option<&Path>,
) -> CliResult<FinalizeResponse> {
    let draft = load_draft(path)?;
    let invoice = draft.finalize()?;
    let display_number = invoice.display_number(&config.invoice_prefix);

    if let Some(out) = out {
        write_json(out, &invoice)?;
    }

    info!(%display_number, grand_total = %invoice.grand_total, "invoice generated");
    Ok(FinalizeResponse {
        display_number,
        invoice,
    })
}
