//! Calculator configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::DisplayFormat;

/// Logging verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Informational messages
    Verbose,
    /// Everything, including engine state transitions
    Debug,
}

impl Verbosity {
    /// Resolves `-v`/`-q` flags; `None` when no flag was given
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Option<Self> {
        if quiet {
            return Some(Self::Quiet);
        }
        match verbose {
            0 => None,
            1 => Some(Self::Verbose),
            _ => Some(Self::Debug),
        }
    }

    /// `EnvFilter` directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "trace",
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for this schema
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A value is out of range
    #[error("Invalid config value: {message}")]
    Invalid {
        /// What is wrong
        message: String,
    },
}

/// Top-level configuration
///
/// ```yaml
/// display:
///   group_separator: "."
///   group_size: 3
/// verbosity: verbose
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Display line formatting
    pub display: DisplayFormat,
    /// Logging verbosity
    pub verbosity: Verbosity,
}

impl CalculatorConfig {
    /// Parses and validates a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Rejects settings the display cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.group_size == 0 {
            return Err(ConfigError::Invalid {
                message: "display.group_size must be at least 1".to_string(),
            });
        }
        let sep = self.display.group_separator;
        if sep.is_ascii_digit() || sep == '.' || sep == '-' {
            return Err(ConfigError::Invalid {
                message: format!(
                    "display.group_separator {sep:?} would be read as part of a number"
                ),
            });
        }
        Ok(())
    }
}
