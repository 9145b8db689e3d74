//! Errors raised while assembling the configuration.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::locale::LocaleError;

/// Failure to produce a valid configuration at start-up.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// The configuration file is not valid JSON for the record.
    #[error("Failed to parse config file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// An environment override holds a malformed locale.
    #[error("Invalid environment override: {0}")]
    Locale(#[from] LocaleError),

    /// The merged configuration violates a constraint.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}
