//! Command-line front end
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc                        # Interactive keypad in the terminal
//! pocket-calc --keys "12+8="         # Feed keys, print the display
//! pocket-calc --keys "5/0=" --json   # Same, as JSON
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{CalculatorConfig, ConfigError, Verbosity};
use crate::core::{CalcError, CalculatorEngine, DisplayFormat};
use crate::input::InputHandler;
use crate::{logging, tui};

/// pocket-calc: four-function pocket calculator
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Keys to press instead of starting the interactive keypad
    /// (digits, `.`, `+ - * /`, `=`)
    #[arg(long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// Print the display as JSON (with --keys)
    #[arg(long, requires = "keys")]
    pub json: bool,

    /// YAML configuration file
    #[arg(short, long, value_name = "PATH", env = "POCKET_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that end the process
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be installed
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

/// Display after a scripted run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Previous-operand line
    pub previous: String,
    /// Current-operand line
    pub current: String,
    /// Last condition the engine reported, if any
    pub notice: Option<String>,
}

/// Loads config, applies flag overrides, installs logging and runs
pub fn run(cli: Cli) -> CliResult<()> {
    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    if let Some(verbosity) = Verbosity::from_flags(cli.verbose, cli.quiet) {
        config.verbosity = verbosity;
    }

    logging::init(config.verbosity).map_err(|message| CliError::Logging { message })?;
    info!(config = ?cli.config, verbosity = ?config.verbosity, "starting");

    match cli.keys {
        Some(keys) => {
            let report = run_script(&keys, config.display);
            let stdout = std::io::stdout();
            write_report(&mut stdout.lock(), &report, cli.json)
        }
        None => tui::run(config.display),
    }
}

/// Presses each character of `keys` and returns the final display
///
/// Characters with no key mapping are skipped.
#[must_use]
pub fn run_script(keys: &str, format: DisplayFormat) -> ScriptReport {
    let mut engine = CalculatorEngine::with_format(format);
    let mut notice: Option<CalcError> = None;

    for ch in keys.chars() {
        let Some(command) = InputHandler::handle_char(ch) else {
            debug!(key = ?ch, "skipping unmapped key");
            continue;
        };
        if let Err(err) = engine.apply(command) {
            notice = Some(err);
        }
    }

    let display = engine.display();
    ScriptReport {
        previous: display.previous,
        current: display.current,
        notice: notice.map(|e| e.to_string()),
    }
}

/// Writes a report as two display lines (plus a notice line) or as JSON
pub fn write_report<W: Write>(out: &mut W, report: &ScriptReport, json: bool) -> CliResult<()> {
    if json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report.previous)?;
        writeln!(out, "{}", report.current)?;
        if let Some(notice) = &report.notice {
            writeln!(out, "! {notice}")?;
        }
    }
    Ok(())
}
