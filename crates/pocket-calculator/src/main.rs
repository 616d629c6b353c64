//! pocket-calc: four-function calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc                       # Interactive keypad
//! pocket-calc --keys "3+4-2="       # Scripted keys, prints the display
//! pocket-calc -c calc.yaml -vv      # Config file, debug logging
//! ```

use clap::Parser;
use pocket_calculator::cli::{self, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
