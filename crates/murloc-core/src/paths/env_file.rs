//! The `.env` file holding persisted user overrides.

use std::fs;
use std::path::PathBuf;

use super::ensure::{DirectoryCreationStrategy, ensure_directory};
use super::error::PathError;
use super::platform::data_root;

pub(super) const ENV_FILE_NAME: &str = ".env";

/// Location of the `.env` file that stores user overrides.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(ENV_FILE_NAME))
}

/// Persist a `key=value` pair into the `.env` file.
///
/// The value is written quoted so that `dotenvy` reads it back verbatim,
/// spaces included. Values spanning several lines are refused.
///
/// An existing entry for `key` is replaced in place (later duplicates are
/// dropped); otherwise the pair is appended. The data root is created if
/// needed. Returns the path that was written.
pub fn persist_env_value(key: &str, value: &str) -> Result<PathBuf, PathError> {
    let env_path = env_file_path()?;
    if value.contains(['\n', '\r']) {
        return Err(PathError::EnvFileError {
            path: env_path,
            reason: format!("value for {key} contains a line break"),
        });
    }
    if let Some(parent) = env_path.parent() {
        ensure_directory(parent, DirectoryCreationStrategy::AutoCreate)?;
    }

    let env_error = |e: std::io::Error| PathError::EnvFileError {
        path: env_path.clone(),
        reason: e.to_string(),
    };

    let existing = if env_path.exists() {
        fs::read_to_string(&env_path).map_err(env_error)?
    } else {
        String::new()
    };

    let content = upsert_line(&existing, key, value);
    fs::write(&env_path, content).map_err(env_error)?;

    tracing::debug!(key, path = %env_path.display(), "persisted override");
    Ok(env_path)
}

/// Quote a value for the `.env` file.
///
/// Single quotes keep the value literal. A value that itself holds a single
/// quote is double-quoted, escaping backslashes, `"` and `$`.
fn quote_value(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn upsert_line(existing: &str, key: &str, value: &str) -> String {
    let entry = format!("{key}={}", quote_value(value));
    let mut updated = false;
    let mut output: Vec<String> = Vec::new();

    for line in existing.lines() {
        match line.split_once('=') {
            Some((lhs, _)) if lhs.trim() == key => {
                if !updated {
                    output.push(entry.clone());
                    updated = true;
                }
            }
            _ => output.push(line.to_string()),
        }
    }

    if !updated {
        output.push(entry);
    }

    let mut content = output.join("\n");
    content.push('\n');
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::platform::ENV_DATA_DIR;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_upsert_appends_new_key() {
        let out = upsert_line("# overrides\nMURLOC_HOST=a\n", "MURLOC_END_SOUND", "horn.wav");
        assert_eq!(out, "# overrides\nMURLOC_HOST=a\nMURLOC_END_SOUND='horn.wav'\n");
    }

    #[test]
    fn test_upsert_replaces_and_dedupes() {
        let out = upsert_line("MURLOC_HOST=a\nOTHER=1\nMURLOC_HOST = b\n", "MURLOC_HOST", "c");
        assert_eq!(out, "MURLOC_HOST='c'\nOTHER=1\n");
    }

    #[test]
    fn test_quote_value() {
        assert_eq!(quote_value("frFR, enUS"), "'frFR, enUS'");
        assert_eq!(quote_value("it's.mp3"), "\"it's.mp3\"");
        assert_eq!(quote_value(r#"a'b"c\$d"#), r#""a'b\"c\\\$d""#);
    }

    #[test]
    fn test_persist_rejects_line_breaks() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(ENV_DATA_DIR, temp.path().to_string_lossy().as_ref());

        for value in ["Data\nMURLOC_HOST=evil.example", "Data\rX=1"] {
            let err = persist_env_value("MURLOC_TARGET_PATH", value).unwrap_err();
            assert!(matches!(err, PathError::EnvFileError { .. }));
        }
        assert!(!temp.path().join(ENV_FILE_NAME).exists());
    }

    #[test]
    fn test_persist_writes_into_data_root() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let data = temp.path().join("nested").join("data");
        let _env = EnvVarGuard::set(ENV_DATA_DIR, data.to_string_lossy().as_ref());

        let written = persist_env_value("MURLOC_DEFAULT_LANGUAGE", "frFR").unwrap();
        assert_eq!(written, data.join(".env"));

        persist_env_value("MURLOC_DEFAULT_LANGUAGE", "enUS").unwrap();
        let contents = fs::read_to_string(&written).unwrap();
        assert_eq!(contents, "MURLOC_DEFAULT_LANGUAGE='enUS'\n");
    }
}
