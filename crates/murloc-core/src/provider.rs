//! Access to the effective configuration.

use std::fmt;
use std::path::PathBuf;

use crate::config::{LauncherConfig, launcher_config};

/// Source of the launcher configuration.
pub trait ConfigProvider: Send + Sync {
    /// The configuration record. Always returns the same values.
    fn config(&self) -> &LauncherConfig;
}

/// Provider backed by the compiled-in record.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinConfig;

impl ConfigProvider for BuiltinConfig {
    fn config(&self) -> &LauncherConfig {
        launcher_config()
    }
}

/// A layer that contributed to a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Compiled-in values.
    Builtin,
    /// A JSON file.
    File(PathBuf),
    /// `MURLOC_*` environment variables; lists the fields they set.
    Environment(Vec<&'static str>),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Environment(fields) => write!(f, "environment ({})", fields.join(", ")),
        }
    }
}

/// Validated configuration produced by [`ConfigLoader`](crate::ConfigLoader).
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    config: LauncherConfig,
    sources: Vec<ConfigSource>,
}

impl LoadedConfig {
    pub(crate) const fn new(config: LauncherConfig, sources: Vec<ConfigSource>) -> Self {
        Self { config, sources }
    }

    /// Layers applied, lowest precedence first.
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Whether only the compiled-in values are in effect.
    pub fn is_builtin(&self) -> bool {
        matches!(self.sources.as_slice(), [ConfigSource::Builtin])
    }
}

impl ConfigProvider for LoadedConfig {
    fn config(&self) -> &LauncherConfig {
        &self.config
    }
}
