//! Layered configuration loading.
//!
//! Precedence, lowest first: compiled-in values, JSON file, `MURLOC_*`
//! environment variables. The merged record is validated before it is
//! returned, so callers never see a partially applied configuration.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{LauncherConfig, validate_config};
use crate::error::LoadError;
use crate::overrides::ConfigOverrides;
use crate::provider::{ConfigSource, LoadedConfig};

/// Environment variable naming a JSON configuration file.
pub const ENV_CONFIG_FILE: &str = "MURLOC_CONFIG_FILE";

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Builds a [`LoadedConfig`] from the configured layers.
pub struct ConfigLoader {
    file: Option<PathBuf>,
    lookup: EnvLookup,
}

impl ConfigLoader {
    /// Loader reading the process environment.
    pub fn new() -> Self {
        Self {
            file: None,
            lookup: Box::new(|key: &str| std::env::var(key).ok()),
        }
    }

    /// Read this JSON file instead of the one named by `MURLOC_CONFIG_FILE`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Replace the environment lookup.
    #[must_use]
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.lookup = Box::new(lookup);
        self
    }

    /// Ignore the environment entirely.
    #[must_use]
    pub fn without_env(self) -> Self {
        self.with_env_lookup(|_| None)
    }

    /// File layer in effect: the explicit path, else `MURLOC_CONFIG_FILE`.
    pub fn config_file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            (self.lookup)(ENV_CONFIG_FILE)
                .filter(|raw| !raw.trim().is_empty())
                .map(|raw| PathBuf::from(raw.trim()))
        })
    }

    /// Assemble, validate and freeze the configuration.
    pub fn load(&self) -> Result<LoadedConfig, LoadError> {
        let mut config = LauncherConfig::builtin();
        let mut sources = vec![ConfigSource::Builtin];

        if let Some(path) = self.config_file() {
            let overrides = read_overrides_file(&path)?;
            tracing::debug!(
                path = %path.display(),
                fields = ?overrides.fields(),
                "applying config file"
            );
            overrides.apply_to(&mut config);
            sources.push(ConfigSource::File(path));
        }

        let env = ConfigOverrides::from_lookup(&self.lookup)?;
        if !env.is_empty() {
            tracing::debug!(fields = ?env.fields(), "applying environment overrides");
            env.apply_to(&mut config);
            sources.push(ConfigSource::Environment(env.fields()));
        }

        validate_config(&config)?;
        tracing::debug!(
            host = %config.host,
            default_language = %config.default_language,
            "configuration loaded"
        );

        Ok(LoadedConfig::new(config, sources))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}

/// Read a JSON file holding some or all configuration fields.
pub fn read_overrides_file(path: &Path) -> Result<ConfigOverrides, LoadError> {
    let raw = fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
