//! Locale codes used by the launcher (`enUS`, `frFR`, ...).
//!
//! A locale is two lowercase ASCII letters for the language followed by two
//! uppercase ASCII letters for the region. The type is validated on
//! construction and serializes as a plain string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a well-formed locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a locale code (expected e.g. enUS, frFR)")]
pub struct LocaleError(pub String);

/// A validated locale code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parse and validate a locale code.
    pub fn new(code: impl Into<String>) -> Result<Self, LocaleError> {
        let code = code.into();
        if is_locale_code(&code) {
            Ok(Self(code))
        } else {
            Err(LocaleError(code))
        }
    }

    /// Wrap a compiled-in literal. Literals are checked by tests, not at runtime.
    pub(crate) fn from_static(code: &'static str) -> Self {
        debug_assert!(is_locale_code(code), "malformed locale literal {code}");
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-letter language part (`en` for `enUS`).
    pub fn language(&self) -> &str {
        &self.0[..2]
    }

    /// Two-letter region part (`US` for `enUS`).
    pub fn region(&self) -> &str {
        &self.0[2..]
    }

    /// Whether `raw` names this locale once case and `-`/`_` separators are ignored.
    ///
    /// `en-us`, `EN_US` and `enus` all loosely match `enUS`.
    pub fn loosely_matches(&self, raw: &str) -> bool {
        let mut folded = raw
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase());
        let mut ours = self.0.chars().map(|c| c.to_ascii_lowercase());

        loop {
            match (folded.next(), ours.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => {}
                _ => return false,
            }
        }
    }
}

fn is_locale_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 4
        && bytes[..2].iter().all(u8::is_ascii_lowercase)
        && bytes[2..].iter().all(u8::is_ascii_uppercase)
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_known_codes() {
        for code in ["enUS", "frFR", "deDE", "esMX", "zhTW"] {
            let locale = Locale::new(code).unwrap();
            assert_eq!(locale.as_str(), code);
        }
    }

    #[test]
    fn test_rejects_malformed_codes() {
        for code in ["", "en", "en-US", "ENUS", "enus", "enUSA", "e1US", "énUS"] {
            assert_eq!(Locale::new(code), Err(LocaleError(code.to_string())));
        }
    }

    #[test]
    fn test_language_and_region() {
        let locale: Locale = "frFR".parse().unwrap();
        assert_eq!(locale.language(), "fr");
        assert_eq!(locale.region(), "FR");
    }

    #[test]
    fn test_loose_matching() {
        let locale = Locale::new("enUS").unwrap();
        assert!(locale.loosely_matches("enUS"));
        assert!(locale.loosely_matches("en-us"));
        assert!(locale.loosely_matches(" EN_US "));
        assert!(!locale.loosely_matches("en"));
        assert!(!locale.loosely_matches("enGB"));
        assert!(!locale.loosely_matches("enUSx"));
    }

    #[test]
    fn test_serde_is_plain_string() {
        let locale = Locale::new("frFR").unwrap();
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"frFR\"");

        let parsed: Locale = serde_json::from_str("\"enUS\"").unwrap();
        assert_eq!(parsed, "enUS");

        assert!(serde_json::from_str::<Locale>("\"english\"").is_err());
    }
}
