//! `murloc set` persistence against a temporary data root.
//!
//! Kept in its own test binary because it changes `MURLOC_DATA_DIR`.

#![allow(unsafe_code)]

use std::collections::HashMap;
use std::fs;

use murloc_cli::handlers::set;
use murloc_cli::{CliConfig, CliError, ConfigField};
use tempfile::tempdir;

#[test]
fn test_set_validates_then_persists() {
    let temp = tempdir().unwrap();
    let data = temp.path().join("data");
    unsafe {
        std::env::set_var("MURLOC_DATA_DIR", &data);
        std::env::remove_var("MURLOC_DEFAULT_LANGUAGE");
        std::env::remove_var("MURLOC_AVAILABLE_LANGUAGE");
        std::env::remove_var("MURLOC_CONFIG_FILE");
    }
    let config = CliConfig::default();

    let written = set::persist(&config, ConfigField::DefaultLanguage, "frFR").unwrap();
    assert_eq!(written, data.join(".env"));
    assert_eq!(
        fs::read_to_string(&written).unwrap(),
        "MURLOC_DEFAULT_LANGUAGE='frFR'\n"
    );

    let rejected = set::persist(&config, ConfigField::DefaultLanguage, "deDE").unwrap_err();
    assert!(matches!(rejected, CliError::Config(_)));
    assert_eq!(rejected.exit_code(), 78);

    let blank = set::persist(&config, ConfigField::EndSound, "  ").unwrap_err();
    assert!(matches!(blank, CliError::Arguments(_)));

    let injected =
        set::persist(&config, ConfigField::TargetPath, "Data\nMURLOC_HOST=evil.example")
            .unwrap_err();
    assert!(matches!(injected, CliError::Arguments(_)));

    set::persist(&config, ConfigField::AvailableLanguage, "frFR, enUS, deDE").unwrap();
    set::persist(&config, ConfigField::EndSound, "horn.wav").unwrap();

    let persisted: HashMap<String, String> = dotenvy::from_path_iter(&written)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(persisted.len(), 3);
    assert_eq!(persisted["MURLOC_DEFAULT_LANGUAGE"], "frFR");
    assert_eq!(persisted["MURLOC_AVAILABLE_LANGUAGE"], "frFR, enUS, deDE");
    assert_eq!(persisted["MURLOC_END_SOUND"], "horn.wav");
    assert!(!persisted.contains_key("MURLOC_HOST"));
}
