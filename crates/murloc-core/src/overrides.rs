//! Partial configuration used by the file and environment layers.

use serde::{Deserialize, Serialize};

use crate::config::LauncherConfig;
use crate::locale::{Locale, LocaleError};

/// Environment variable overriding `host`.
pub const ENV_HOST: &str = "MURLOC_HOST";
/// Environment variable overriding `target_path`.
pub const ENV_TARGET_PATH: &str = "MURLOC_TARGET_PATH";
/// Environment variable overriding `available_language` (comma-separated).
pub const ENV_AVAILABLE_LANGUAGE: &str = "MURLOC_AVAILABLE_LANGUAGE";
/// Environment variable overriding `default_language`.
pub const ENV_DEFAULT_LANGUAGE: &str = "MURLOC_DEFAULT_LANGUAGE";
/// Environment variable overriding `patchlist_endpoint`.
pub const ENV_PATCHLIST_ENDPOINT: &str = "MURLOC_PATCHLIST_ENDPOINT";
/// Environment variable overriding `end_sound`.
pub const ENV_END_SOUND: &str = "MURLOC_END_SOUND";

/// Optional value for each configuration field.
///
/// `None` leaves the current value in place when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub target_path: Option<String>,
    pub available_language: Option<Vec<Locale>>,
    pub default_language: Option<Locale>,
    pub patchlist_endpoint: Option<String>,
    pub end_sound: Option<String>,
}

impl ConfigOverrides {
    /// Read overrides through an environment lookup function.
    ///
    /// Blank values are skipped. A malformed locale is an error rather than
    /// being silently dropped.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LocaleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            let value = lookup(key)?;
            if value.trim().is_empty() {
                tracing::warn!(key, "ignoring blank configuration override");
                None
            } else {
                Some(value.trim().to_string())
            }
        };

        let available_language = read(ENV_AVAILABLE_LANGUAGE)
            .map(|raw| parse_language_list(&raw))
            .transpose()?;
        let default_language = read(ENV_DEFAULT_LANGUAGE).map(Locale::new).transpose()?;

        Ok(Self {
            host: read(ENV_HOST),
            target_path: read(ENV_TARGET_PATH),
            available_language,
            default_language,
            patchlist_endpoint: read(ENV_PATCHLIST_ENDPOINT),
            end_sound: read(ENV_END_SOUND),
        })
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Names of the fields this layer sets, in declaration order.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.host.is_some() {
            fields.push("host");
        }
        if self.target_path.is_some() {
            fields.push("target_path");
        }
        if self.available_language.is_some() {
            fields.push("available_language");
        }
        if self.default_language.is_some() {
            fields.push("default_language");
        }
        if self.patchlist_endpoint.is_some() {
            fields.push("patchlist_endpoint");
        }
        if self.end_sound.is_some() {
            fields.push("end_sound");
        }
        fields
    }

    /// Apply every set field onto `config`.
    pub fn apply_to(&self, config: &mut LauncherConfig) {
        if let Some(ref host) = self.host {
            config.host.clone_from(host);
        }
        if let Some(ref target) = self.target_path {
            config.target_path.clone_from(target);
        }
        if let Some(ref languages) = self.available_language {
            config.available_language.clone_from(languages);
        }
        if let Some(ref default) = self.default_language {
            config.default_language.clone_from(default);
        }
        if let Some(ref endpoint) = self.patchlist_endpoint {
            config.patchlist_endpoint.clone_from(endpoint);
        }
        if let Some(ref sound) = self.end_sound {
            config.end_sound.clone_from(sound);
        }
    }
}

/// Parse a comma-separated locale list such as `frFR, enUS`.
///
/// Empty entries (`frFR,,enUS` or a trailing comma) are skipped.
pub fn parse_language_list(raw: &str) -> Result<Vec<Locale>, LocaleError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Locale::new)
        .collect()
}
