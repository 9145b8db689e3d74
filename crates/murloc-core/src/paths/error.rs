//! Failures while locating or preparing launcher directories.

use std::path::PathBuf;
use thiserror::Error;

/// Why a launcher directory or the overrides file could not be used.
#[derive(Debug, Error)]
pub enum PathError {
    /// `~` was used in an override but the platform reports no home directory.
    #[error("Cannot expand '~': no home directory for this user")]
    NoHomeDir,

    /// No platform data directory and no `MURLOC_DATA_DIR` override.
    #[error("Cannot locate a data directory for launcher overrides; set MURLOC_DATA_DIR")]
    NoDataDir,

    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Returned for `DirectoryCreationStrategy::Disallow`.
    #[error("Launcher directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    #[error("Cannot create launcher directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// The write probe in [`verify_writable`](super::verify_writable) failed.
    #[error("Launcher directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    /// The overrides `.env` file could not be read or written, or a value
    /// cannot be stored on a single line.
    #[error("Cannot update overrides file {path}: {reason}")]
    EnvFileError { path: PathBuf, reason: String },

    /// The install root defaults to the working directory, which is unavailable.
    #[error("Cannot determine the install root from the current directory: {0}")]
    CurrentDirError(String),
}
