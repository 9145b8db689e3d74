//! Launcher configuration record and validation.
//!
//! `LauncherConfig` is a plain data record. The compiled-in values live in the
//! `DEFAULT_*` constants and are exposed as a process-wide static through
//! [`launcher_config`].

use std::fmt;
use std::path::{Component, Path};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::locale::Locale;

/// FTP host serving the game data.
pub const DEFAULT_HOST: &str = "ftp.murlocvillage.com";

/// Destination for downloaded data, relative to the install root.
pub const DEFAULT_TARGET_PATH: &str = "./Data";

/// Locales offered by the launcher, in display order.
pub const DEFAULT_AVAILABLE_LANGUAGES: [&str; 2] = ["frFR", "enUS"];

/// Locale used when none is requested.
pub const DEFAULT_LANGUAGE: &str = "enUS";

/// Remote API returning the patch list.
pub const DEFAULT_PATCHLIST_ENDPOINT: &str = "https://wotlk.murlocvillage.com/api/launcher";

/// Sound played once an update finishes, relative to the assets directory.
pub const DEFAULT_END_SOUND: &str = "murloc.mp3";

static BUILTIN: LazyLock<LauncherConfig> = LazyLock::new(LauncherConfig::builtin);

/// The compiled-in launcher configuration.
///
/// Initialised on first access and shared for the rest of the process.
pub fn launcher_config() -> &'static LauncherConfig {
    &BUILTIN
}

/// Launcher configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// FTP hostname, without scheme or path.
    pub host: String,

    /// Relative directory where downloaded data is placed.
    pub target_path: String,

    /// Supported locales, in display order.
    pub available_language: Vec<Locale>,

    /// Locale used by default; always one of `available_language`.
    pub default_language: Locale,

    /// HTTPS endpoint of the patch-list API.
    pub patchlist_endpoint: String,

    /// File name of the completion sound inside the assets directory.
    pub end_sound: String,
}

impl LauncherConfig {
    /// Build an owned copy of the compiled-in values.
    pub fn builtin() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            target_path: DEFAULT_TARGET_PATH.to_string(),
            available_language: DEFAULT_AVAILABLE_LANGUAGES
                .into_iter()
                .map(Locale::from_static)
                .collect(),
            default_language: Locale::from_static(DEFAULT_LANGUAGE),
            patchlist_endpoint: DEFAULT_PATCHLIST_ENDPOINT.to_string(),
            end_sound: DEFAULT_END_SOUND.to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    pub fn available_language(&self) -> &[Locale] {
        &self.available_language
    }

    pub fn default_language(&self) -> &Locale {
        &self.default_language
    }

    pub fn patchlist_endpoint(&self) -> &str {
        &self.patchlist_endpoint
    }

    pub fn end_sound(&self) -> &str {
        &self.end_sound
    }

    /// Whether `code` is one of the available locales (exact match).
    pub fn supports(&self, code: &str) -> bool {
        self.available_language.iter().any(|l| l == code)
    }

    /// Parse the patch-list endpoint, enforcing the HTTPS requirement.
    pub fn patchlist_url(&self) -> Result<Url, ConfigError> {
        parse_endpoint(&self.patchlist_endpoint)
    }

    /// Pick the locale to use for a requested language.
    ///
    /// Exact matches win, then matches ignoring case and `-`/`_`. Anything else,
    /// including no request at all, falls back to the default locale.
    pub fn select_language(&self, requested: Option<&str>) -> LanguageSelection<'_> {
        let requested = requested.map(str::trim).filter(|r| !r.is_empty());

        if let Some(raw) = requested {
            let found = self
                .available_language
                .iter()
                .find(|l| *l == raw)
                .or_else(|| self.available_language.iter().find(|l| l.loosely_matches(raw)));

            if let Some(locale) = found {
                return LanguageSelection {
                    locale,
                    source: LanguageSource::Requested,
                };
            }
            tracing::debug!(
                requested = raw,
                default = %self.default_language,
                "unsupported locale requested, using default"
            );
        }

        LanguageSelection {
            locale: &self.default_language,
            source: LanguageSource::Default,
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Display for LauncherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let languages: Vec<&str> = self.available_language.iter().map(Locale::as_str).collect();
        writeln!(f, "host = {}", self.host)?;
        writeln!(f, "target_path = {}", self.target_path)?;
        writeln!(f, "available_language = {}", languages.join(","))?;
        writeln!(f, "default_language = {}", self.default_language)?;
        writeln!(f, "patchlist_endpoint = {}", self.patchlist_endpoint)?;
        write!(f, "end_sound = {}", self.end_sound)
    }
}

/// How a locale was chosen by [`LauncherConfig::select_language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    /// The requested locale is available.
    Requested,
    /// Nothing usable was requested; the default locale applies.
    Default,
}

/// Result of locale selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSelection<'a> {
    pub locale: &'a Locale,
    pub source: LanguageSource,
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Host cannot be empty")]
    EmptyHost,

    #[error("Invalid host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("Target path cannot be empty")]
    EmptyTargetPath,

    #[error("Target path must be relative, got {0}")]
    AbsoluteTargetPath(String),

    #[error("Invalid target path {path:?}: {reason}")]
    InvalidTargetPath { path: String, reason: String },

    #[error("At least one language must be available")]
    NoLanguages,

    #[error("Language {0} is listed more than once")]
    DuplicateLanguage(Locale),

    #[error("Default language {default} is not one of the available languages ({available})")]
    DefaultLanguageUnavailable { default: Locale, available: String },

    #[error("Invalid patch list endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Patch list endpoint must use https, got {0}")]
    InsecureEndpoint(String),

    #[error("End sound cannot be empty")]
    EmptyEndSound,

    #[error("Invalid end sound '{name}': {reason}")]
    InvalidEndSound { name: String, reason: String },
}

/// Validate every field and the cross-field language constraint.
///
/// Returns the first violation found, checking fields in declaration order.
pub fn validate_config(config: &LauncherConfig) -> Result<(), ConfigError> {
    validate_host(&config.host)?;
    validate_target_path(&config.target_path)?;
    validate_languages(&config.available_language, &config.default_language)?;
    parse_endpoint(&config.patchlist_endpoint)?;
    validate_end_sound(&config.end_sound)?;
    Ok(())
}

fn validate_host(host: &str) -> Result<(), ConfigError> {
    if host.trim().is_empty() {
        return Err(ConfigError::EmptyHost);
    }

    let invalid = |reason: &str| ConfigError::InvalidHost {
        host: host.to_string(),
        reason: reason.to_string(),
    };

    if host.contains('/') || host.contains('\\') {
        return Err(invalid("hostname cannot contain path separators"));
    }
    if host.chars().any(char::is_whitespace) {
        return Err(invalid("hostname cannot contain whitespace"));
    }
    url::Host::parse(host).map_err(|e| invalid(&e.to_string()))?;
    Ok(())
}

fn validate_target_path(target: &str) -> Result<(), ConfigError> {
    if target.trim().is_empty() {
        return Err(ConfigError::EmptyTargetPath);
    }
    let path = Path::new(target);
    if path.has_root() || path.components().any(|c| matches!(c, Component::Prefix(_))) {
        return Err(ConfigError::AbsoluteTargetPath(target.to_string()));
    }
    if target.chars().any(char::is_control) {
        return Err(ConfigError::InvalidTargetPath {
            path: target.to_string(),
            reason: "contains control characters".to_string(),
        });
    }
    Ok(())
}

fn validate_languages(available: &[Locale], default: &Locale) -> Result<(), ConfigError> {
    if available.is_empty() {
        return Err(ConfigError::NoLanguages);
    }

    for (i, locale) in available.iter().enumerate() {
        if available[..i].contains(locale) {
            return Err(ConfigError::DuplicateLanguage(locale.clone()));
        }
    }

    if !available.contains(default) {
        let listed: Vec<&str> = available.iter().map(Locale::as_str).collect();
        return Err(ConfigError::DefaultLanguageUnavailable {
            default: default.clone(),
            available: listed.join(", "),
        });
    }
    Ok(())
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "https" {
        return Err(ConfigError::InsecureEndpoint(url.scheme().to_string()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::InvalidEndpoint {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(url)
}

fn validate_end_sound(name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::EmptyEndSound);
    }

    let invalid = |reason: &str| ConfigError::InvalidEndSound {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.contains('/') || name.contains('\\') {
        return Err(invalid("must be a bare file name"));
    }
    if name.chars().any(char::is_control) {
        return Err(invalid("contains control characters"));
    }
    let path = Path::new(name);
    if path.file_name().and_then(|n| n.to_str()) != Some(name) {
        return Err(invalid("must be a bare file name"));
    }
    if path.extension().is_none_or(|ext| ext.is_empty()) {
        return Err(invalid("missing file extension"));
    }
    Ok(())
}
