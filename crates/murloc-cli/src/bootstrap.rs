//! CLI composition root: environment, logging and configuration loading.

use std::path::PathBuf;

use murloc_core::{ConfigLoader, LoadedConfig, env_file_path};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Options that shape how the configuration is loaded.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit JSON override file.
    pub config_file: Option<PathBuf>,
}

impl CliConfig {
    /// Loader honoring these options and the process environment.
    pub fn loader(&self) -> ConfigLoader {
        match self.config_file {
            Some(ref path) => ConfigLoader::new().with_file(path),
            None => ConfigLoader::new(),
        }
    }
}

/// Everything a command handler needs.
#[derive(Debug)]
pub struct CliContext {
    pub config: LoadedConfig,
}

/// Load and validate the configuration.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let loaded = config.loader().load()?;
    Ok(CliContext { config: loaded })
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug and the default is warn.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load `.env` files: the user file in the data root, then one in the working directory.
///
/// Variables already present in the environment are never overwritten. Runs
/// before [`init_logging`] so a `RUST_LOG` from either file applies; failures
/// are returned for logging once the subscriber is installed.
pub fn load_env_files() -> Vec<String> {
    let mut problems = Vec::new();
    if let Ok(path) = env_file_path() {
        if path.is_file() {
            if let Err(e) = dotenvy::from_path(&path) {
                problems.push(format!("failed to read {}: {e}", path.display()));
            }
        }
    }
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            problems.push(format!("failed to read working-directory .env: {e}"));
        }
    }
    problems
}
