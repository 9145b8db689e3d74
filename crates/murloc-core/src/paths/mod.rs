//! Path resolution for the launcher's directories.
//!
//! - Data root (user overrides, `.env`)
//! - Install root and the download target directory
//! - Assets directory and the completion sound
//!
//! Returns `PathBuf` and `PathError`; no interactive I/O happens here.

mod ensure;
mod env_file;
mod error;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};
pub use env_file::{env_file_path, persist_env_value};
pub use error::PathError;
pub use platform::{
    ENV_ASSETS_DIR, ENV_DATA_DIR, ENV_INSTALL_DIR, assets_dir, data_root, install_root,
};
pub use resolver::{ResolvedPaths, end_sound_path, target_dir};
