//! `set` command handler.
//!
//! Validates the new value against the rest of the current configuration
//! before writing it to the user `.env` file.

use std::path::PathBuf;

use anyhow::Result;
use murloc_core::persist_env_value;

use crate::bootstrap::CliConfig;
use crate::commands::ConfigField;
use crate::error::CliError;

/// Persist `value` for `field` and report where it was saved.
pub fn execute(config: &CliConfig, field: ConfigField, value: &str) -> Result<()> {
    let path = persist(config, field, value)?;
    println!(
        "✓ {} set to {} (saved to {})",
        field.record_name(),
        value.trim(),
        path.display()
    );
    Ok(())
}

/// Validate and persist without printing. Returns the env file written.
pub fn persist(config: &CliConfig, field: ConfigField, value: &str) -> Result<PathBuf, CliError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CliError::Arguments(format!(
            "{} cannot be set to an empty value",
            field.record_name()
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(CliError::Arguments(format!(
            "{} must fit on a single line",
            field.record_name()
        )));
    }

    let key = field.env_key();
    let candidate = value.to_string();
    config
        .loader()
        .with_env_lookup(move |k| {
            if k == key {
                Some(candidate.clone())
            } else {
                std::env::var(k).ok()
            }
        })
        .load()?;

    let path = persist_env_value(key, value)?;
    tracing::info!(field = field.record_name(), path = %path.display(), "override saved");
    Ok(path)
}
