//! `.env` loading from the data root.
//!
//! Kept in its own test binary because it changes `MURLOC_DATA_DIR` and `RUST_LOG`.

#![allow(unsafe_code)]

use std::fs;

use murloc_cli::load_env_files;
use tempfile::tempdir;

#[test]
fn test_env_file_applies_before_logging() {
    let temp = tempdir().unwrap();
    unsafe {
        std::env::set_var("MURLOC_DATA_DIR", temp.path());
        std::env::remove_var("RUST_LOG");
        std::env::remove_var("MURLOC_END_SOUND");
    }

    fs::write(
        temp.path().join(".env"),
        "RUST_LOG='murloc=debug'\nMURLOC_END_SOUND='horn.wav'\n",
    )
    .unwrap();
    assert!(load_env_files().is_empty());
    assert_eq!(std::env::var("RUST_LOG").unwrap(), "murloc=debug");
    assert_eq!(std::env::var("MURLOC_END_SOUND").unwrap(), "horn.wav");

    fs::write(temp.path().join(".env"), "MURLOC_HOST=a b\n").unwrap();
    let problems = load_env_files();
    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains(".env"));
}
