//! Command-line surface.
//!
//! Amounts and percentages are parsed as exact decimals, dates as
//! `YYYY-MM-DD`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::commands::draft::{HeaderFields, ItemFields};

#[derive(Parser, Debug)]
#[command(name = "apex-invoice", version, about = "Apex Solar invoice drafts, totals and amounts in words")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a blank draft with one line item
    NewDraft {
        /// Invoice date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, default_value = "draft.json")]
        out: PathBuf,
    },

    /// Append a line item
    AddItem {
        #[arg(long)]
        draft: PathBuf,

        #[command(flatten)]
        fields: ItemArgs,
    },

    /// Remove a line item and renumber the rest
    RemoveItem {
        #[arg(long)]
        draft: PathBuf,

        #[arg(long)]
        id: String,
    },

    /// Change fields of a line item
    UpdateItem {
        #[arg(long)]
        draft: PathBuf,

        #[arg(long)]
        id: String,

        #[command(flatten)]
        fields: ItemArgs,
    },

    /// Set invoice number, dates and GST percentages
    SetHeader {
        #[arg(long)]
        draft: PathBuf,

        #[command(flatten)]
        fields: HeaderArgs,
    },

    /// Copy a customer record (JSON) onto the draft
    SetCustomer {
        #[arg(long)]
        draft: PathBuf,

        #[arg(long)]
        customer: PathBuf,
    },

    /// Discard the draft and start over
    Reset {
        #[arg(long)]
        draft: PathBuf,

        /// Invoice date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show totals and the amount in words
    Totals {
        #[arg(long)]
        draft: PathBuf,
    },

    /// Validate the draft and print the invoice record
    Finalize {
        #[arg(long)]
        draft: PathBuf,

        /// Also write the invoice JSON here
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write a rupee amount in words
    Words {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the financial year of a date
    FinancialYear {
        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ItemArgs {
    #[arg(long)]
    pub description: Option<String>,

    /// HSN/SAC code
    #[arg(long)]
    pub hsn: Option<String>,

    /// Rate per kWp
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Quantity in watts
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<Decimal>,

    #[arg(long)]
    pub unit: Option<String>,
}

impl From<ItemArgs> for ItemFields {
    fn from(args: ItemArgs) -> Self {
        ItemFields {
            description: args.description,
            hsn_sac_code: args.hsn,
            rate: args.rate,
            quantity: args.quantity,
            unit: args.unit,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct HeaderArgs {
    #[arg(long)]
    pub invoice_number: Option<String>,

    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[arg(long)]
    pub work_order: Option<String>,

    #[arg(long)]
    pub work_order_date: Option<NaiveDate>,

    #[arg(long, allow_hyphen_values = true)]
    pub cgst: Option<Decimal>,

    #[arg(long, allow_hyphen_values = true)]
    pub sgst: Option<Decimal>,
}

impl From<HeaderArgs> for HeaderFields {
    fn from(args: HeaderArgs) -> Self {
        HeaderFields {
            invoice_number: args.invoice_number,
            invoice_date: args.date,
            work_order_reference: args.work_order,
            work_order_date: args.work_order_date,
            cgst_percentage: args.cgst,
            sgst_percentage: args.sgst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_update_item() {
        let cli = Cli::try_parse_from([
            "apex-invoice",
            "update-item",
            "--draft",
            "d.json",
            "--id",
            "abc",
            "--rate",
            "1.50",
            "--quantity",
            "35",
        ])
        .unwrap();

        match cli.command {
            Command::UpdateItem { draft, id, fields } => {
                assert_eq!(draft, PathBuf::from("d.json"));
                assert_eq!(id, "abc");
                let fields = ItemFields::from(fields);
                assert_eq!(fields.rate, Some(dec!(1.50)));
                assert_eq!(fields.quantity, Some(dec!(35)));
                assert!(fields.description.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_dates_and_words() {
        let cli = Cli::try_parse_from(["apex-invoice", "financial-year", "--date", "2026-03-31"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::FinancialYear { date: Some(d) } if d == NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()
        ));

        assert!(Cli::try_parse_from(["apex-invoice", "new-draft", "--date", "31/03/2026"]).is_err());

        let cli = Cli::try_parse_from(["apex-invoice", "words", "0.50"]).unwrap();
        assert!(matches!(cli.command, Command::Words { amount } if amount == "0.50"));
    }
}
