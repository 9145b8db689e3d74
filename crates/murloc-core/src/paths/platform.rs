//! Platform-specific roots and environment overrides.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Overrides the data root (user settings, `.env`).
pub const ENV_DATA_DIR: &str = "MURLOC_DATA_DIR";

/// Overrides the install root the target path is relative to.
pub const ENV_INSTALL_DIR: &str = "MURLOC_INSTALL_DIR";

/// Overrides the assets directory holding launcher sounds.
pub const ENV_ASSETS_DIR: &str = "MURLOC_ASSETS_DIR";

const APP_DIR_NAME: &str = "murloc-launcher";
const ASSETS_DIR_NAME: &str = "assets";

/// Root directory for launcher data.
///
/// Resolution order:
/// 1. `MURLOC_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/murloc-launcher`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Some(path) = env_path(ENV_DATA_DIR)? {
        return Ok(path);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join(APP_DIR_NAME))
}

/// Directory the launcher is installed in.
///
/// Resolution order:
/// 1. `MURLOC_INSTALL_DIR` environment variable
/// 2. Current working directory
pub fn install_root() -> Result<PathBuf, PathError> {
    if let Some(path) = env_path(ENV_INSTALL_DIR)? {
        return Ok(path);
    }
    current_dir()
}

/// Directory holding launcher assets.
///
/// Resolution order:
/// 1. `MURLOC_ASSETS_DIR` environment variable
/// 2. `assets/` under the install root
pub fn assets_dir(install_root: &Path) -> Result<PathBuf, PathError> {
    if let Some(path) = env_path(ENV_ASSETS_DIR)? {
        return Ok(path);
    }
    Ok(install_root.join(ASSETS_DIR_NAME))
}

/// Read a path override, ignoring unset or blank values.
fn env_path(key: &str) -> Result<Option<PathBuf>, PathError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => normalize_user_path(&raw).map(Some),
        _ => Ok(None),
    }
}

fn current_dir() -> Result<PathBuf, PathError> {
    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();

    let expanded = if trimmed == "~" {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?.join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(current_dir()?.join(expanded))
    }
}
