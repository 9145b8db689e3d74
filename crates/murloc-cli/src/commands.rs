//! Available subcommands.

use clap::{Subcommand, ValueEnum};
use murloc_core::overrides::{
    ENV_AVAILABLE_LANGUAGE, ENV_DEFAULT_LANGUAGE, ENV_END_SOUND, ENV_HOST,
    ENV_PATCHLIST_ENDPOINT, ENV_TARGET_PATH,
};

/// Commands for inspecting the launcher configuration.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the effective configuration and its sources
    Show {
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration
    Check,

    /// Show resolved install, data and asset paths
    Paths,

    /// Show which locale would be used
    Locale {
        /// Requested locale (e.g. "frFR", "en-us"); omit for the default
        requested: Option<String>,
    },

    /// Persist an override for one field into the user .env file
    Set {
        /// Field to override
        #[arg(value_enum)]
        field: ConfigField,
        /// New value (comma-separated for available-language)
        value: String,
    },
}

/// A configuration field that can be overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigField {
    Host,
    TargetPath,
    AvailableLanguage,
    DefaultLanguage,
    PatchlistEndpoint,
    EndSound,
}

impl ConfigField {
    /// Environment variable holding this field's override.
    pub const fn env_key(self) -> &'static str {
        match self {
            Self::Host => ENV_HOST,
            Self::TargetPath => ENV_TARGET_PATH,
            Self::AvailableLanguage => ENV_AVAILABLE_LANGUAGE,
            Self::DefaultLanguage => ENV_DEFAULT_LANGUAGE,
            Self::PatchlistEndpoint => ENV_PATCHLIST_ENDPOINT,
            Self::EndSound => ENV_END_SOUND,
        }
    }

    /// Field name as it appears in the record.
    pub const fn record_name(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::TargetPath => "target_path",
            Self::AvailableLanguage => "available_language",
            Self::DefaultLanguage => "default_language",
            Self::PatchlistEndpoint => "patchlist_endpoint",
            Self::EndSound => "end_sound",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_keys_are_distinct() {
        let keys: Vec<&str> = ConfigField::value_variants()
            .iter()
            .map(|f| f.env_key())
            .collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(key.starts_with("MURLOC_"));
            assert!(!keys[..i].contains(key), "duplicate {key}");
        }
    }

    #[test]
    fn test_record_names() {
        assert_eq!(ConfigField::EndSound.record_name(), "end_sound");
        assert_eq!(ConfigField::AvailableLanguage.env_key(), "MURLOC_AVAILABLE_LANGUAGE");
    }
}
