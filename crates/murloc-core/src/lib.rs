#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod loader;
pub mod locale;
pub mod overrides;
pub mod paths;
pub mod provider;

// Re-export commonly used types for convenience
pub use config::{
    ConfigError, DEFAULT_AVAILABLE_LANGUAGES, DEFAULT_END_SOUND, DEFAULT_HOST, DEFAULT_LANGUAGE,
    DEFAULT_PATCHLIST_ENDPOINT, DEFAULT_TARGET_PATH, LanguageSelection, LanguageSource,
    LauncherConfig, launcher_config, validate_config,
};
pub use error::LoadError;
pub use loader::{ConfigLoader, ENV_CONFIG_FILE, read_overrides_file};
pub use locale::{Locale, LocaleError};
pub use overrides::{ConfigOverrides, parse_language_list};
pub use provider::{BuiltinConfig, ConfigProvider, ConfigSource, LoadedConfig};

// Re-export path utilities
pub use paths::{
    DirectoryCreationStrategy, PathError, ResolvedPaths, data_root, ensure_directory,
    env_file_path, persist_env_value,
};
