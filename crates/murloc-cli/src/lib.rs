#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependency used by the integration tests
#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

pub use bootstrap::{CliConfig, CliContext, bootstrap, init_logging, load_env_files};
pub use commands::{Commands, ConfigField};
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
