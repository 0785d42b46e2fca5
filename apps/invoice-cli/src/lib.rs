//! # Apex Invoice CLI
//!
//! Command-line front end for the Apex Solar invoice engine. Drafts live in
//! JSON files; every command prints its result as pretty JSON on stdout
//! while logs go to stderr.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         apex-invoice                                    │
//! │                                                                         │
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐                   │
//! │  │   cli.rs    │──►│  commands/  │──►│  store.rs   │──► draft.json     │
//! │  │ (clap args) │   │ draft,      │   │ (load/save) │                   │
//! │  └─────────────┘   │ invoice,    │   └─────────────┘                   │
//! │                    │ words       │                                      │
//! │                    └──────┬──────┘                                      │
//! │                           │                                             │
//! │                           ▼                                             │
//! │                    ┌─────────────┐   ┌─────────────┐                   │
//! │                    │  apex-core  │   │  config.rs  │                   │
//! │                    │ (pure math) │   │ (APEX_* env)│                   │
//! │                    └─────────────┘   └─────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::ConfigState;
use error::CliResult;

/// Runs one command and returns its JSON output.
///
/// `today` fills in dates the user left out.
pub fn run(cli: Cli, config: &ConfigState, today: NaiveDate) -> CliResult<String> {
    debug!(command = ?cli.command, "running command");

    match cli.command {
        Command::NewDraft { date, out } => {
            to_json(&commands::draft::new_draft(config, date.unwrap_or(today), &out)?)
        }
        Command::AddItem { draft, fields } => {
            to_json(&commands::draft::add_item(config, &draft, fields.into())?)
        }
        Command::RemoveItem { draft, id } => {
            to_json(&commands::draft::remove_item(config, &draft, &id)?)
        }
        Command::UpdateItem { draft, id, fields } => {
            to_json(&commands::draft::update_item(config, &draft, &id, fields.into())?)
        }
        Command::SetHeader { draft, fields } => {
            to_json(&commands::draft::set_header(config, &draft, fields.into())?)
        }
        Command::SetCustomer { draft, customer } => {
            to_json(&commands::draft::set_customer(config, &draft, &customer)?)
        }
        Command::Reset { draft, date } => {
            to_json(&commands::draft::reset(config, &draft, date.unwrap_or(today))?)
        }
        Command::Totals { draft } => to_json(&commands::invoice::totals(config, &draft)?),
        Command::Finalize { draft, out } => {
            to_json(&commands::invoice::finalize(config, &draft, out.as_deref())?)
        }
        Command::Words { amount } => to_json(&commands::words::words(config, &amount)?),
        Command::FinancialYear { date } => {
            to_json(&commands::words::financial_year(date.unwrap_or(today)))
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=apex_core=trace` - Show trace for the core crate only
/// - Default: INFO, DEBUG for apex crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,apex=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
    }

    fn run_args(args: &[&str]) -> CliResult<serde_json::Value> {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let output = run(cli, &ConfigState::default(), today())?;
        Ok(serde_json::from_str(&output).unwrap())
    }

    #[test]
    fn test_end_to_end_invoice() {
        let dir = tempfile::tempdir().unwrap();
        let draft = dir.path().join("draft.json");
        let draft = draft.to_str().unwrap();
        let customer = dir.path().join("customer.json");
        std::fs::write(
            &customer,
            r#"{"companyName":"Sunrise Agro Pvt Ltd","addressLine1":"12 Lake Road"}"#,
        )
        .unwrap();

        let created = run_args(&["apex-invoice", "new-draft", "--out", draft]).unwrap();
        assert_eq!(created["draft"]["financialYear"], "25-26");
        let first = created["draft"]["lineItems"][0]["id"].as_str().unwrap().to_string();

        run_args(&[
            "apex-invoice", "update-item", "--draft", draft, "--id", first.as_str(),
            "--description", "Rooftop solar plant", "--rate", "1.50", "--quantity", "35",
        ])
        .unwrap();
        run_args(&[
            "apex-invoice", "add-item", "--draft", draft,
            "--description", "Net metering work", "--rate", "2.00", "--quantity", "10",
        ])
        .unwrap();
        run_args(&["apex-invoice", "set-header", "--draft", draft, "--invoice-number", "022"]).unwrap();
        run_args(&[
            "apex-invoice", "set-customer", "--draft", draft,
            "--customer", customer.to_str().unwrap(),
        ])
        .unwrap();

        let totals = run_args(&["apex-invoice", "totals", "--draft", draft]).unwrap();
        assert_eq!(totals["totalBasicAmount"], "72500.00");
        assert_eq!(totals["cgstAmount"], "6525.00");
        assert_eq!(totals["sgstAmount"], "6525.00");
        assert_eq!(totals["grandTotal"], "85550.00");

        let invoice = run_args(&["apex-invoice", "finalize", "--draft", draft]).unwrap();
        assert_eq!(invoice["displayNumber"], "AS/25-26/022");
        assert_eq!(
            invoice["invoice"]["amountInWords"],
            "Eighty Five Thousand Five Hundred Fifty Rupees Only"
        );
    }

    #[test]
    fn test_financial_year_defaults_to_today() {
        let json = run_args(&["apex-invoice", "financial-year"]).unwrap();
        assert_eq!(json["financialYear"], "25-26");
    }

    #[test]
    fn test_words_command() {
        let json = run_args(&["apex-invoice", "words", "1250000000"]).unwrap();
        assert_eq!(json["words"], "One Arab Twenty Five Crore Rupees Only");
    }
}
