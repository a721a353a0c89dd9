//! prfacc CLI
//!
//! # Usage
//!
//! ```bash
//! # Score label arrays and print the table
//! prfacc score --true y_true.json --pred y_pred.json
//!
//! # One-hot inputs, JSON report
//! prfacc score --true y_true.json --pred y_pred.json --one-hot --format json
//!
//! # Check a configuration file
//! prfacc validate score.yaml
//! ```

use clap::Parser;
use prfacc::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}
