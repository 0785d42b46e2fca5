//! # Commands
//!
//! One function per subcommand. Each takes plain inputs plus the
//! configuration it needs and returns a serializable response; printing is
//! left to `main`.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  draft.rs     new-draft, add-item, remove-item, update-item             │
//! │  invoice.rs   totals, finalize                                          │
//! │  words.rs     words, financial-year                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod draft;
pub mod invoice;
pub mod words;

use apex_core::{InvoiceDraft, InvoiceTotals};
use serde::Serialize;

use crate::config::ConfigState;

/// Totals with display strings, as shown under the line items table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsView {
    #[serde(flatten)]
    pub totals: InvoiceTotals,
    pub formatted: FormattedTotals,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub total_basic_amount: String,
    pub cgst_amount: String,
    pub sgst_amount: String,
    pub grand_total: String,
}

impl TotalsView {
    pub fn new(config: &ConfigState, totals: InvoiceTotals) -> Self {
        TotalsView {
            formatted: FormattedTotals {
                total_basic_amount: config.format_currency(totals.total_basic_amount),
                cgst_amount: config.format_currency(totals.cgst_amount),
                sgst_amount: config.format_currency(totals.sgst_amount),
                grand_total: config.format_currency(totals.grand_total),
            },
            totals,
        }
    }
}

/// Draft response including the draft and its current totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub draft: InvoiceDraft,
    pub totals: TotalsView,
}

impl DraftResponse {
    pub fn new(config: &ConfigState, draft: InvoiceDraft) -> Self {
        let totals = TotalsView::new(config, draft.totals());
        DraftResponse { draft, totals }
    }
}
