//! # Apex Invoice - Entry Point
//!
//! ```text
//! 1. Initialize tracing (stderr)
//! 2. Parse arguments
//! 3. Load ConfigState from APEX_* variables
//! 4. Run the command, print its JSON on stdout
//! ```
//!
//! Each error is reported once on stderr. Input the user can fix prints a
//! one-line message and exits with code 2; everything else goes back to
//! anyhow, which prints the full chain and exits with code 1.

use anyhow::Context;
use clap::Parser;

use apex_invoice::cli::Cli;
use apex_invoice::config::ConfigState;

fn main() -> anyhow::Result<()> {
    apex_invoice::init_tracing();

    let cli = Cli::parse();
    let config = ConfigState::from_env().context("Failed to load configuration")?;
    let today = chrono::Local::now().date_naive();

    match apex_invoice::run(cli, &config, today) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => match err.exit_code() {
            1 => Err(anyhow::Error::new(err)),
            code => {
                eprintln!("Error: {err}");
                std::process::exit(code);
            }
        },
    }
}
