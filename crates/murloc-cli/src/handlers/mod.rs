//! Command handlers.
//!
//! Each handler takes what it needs (usually the `CliContext`), calls into
//! `murloc-core` and formats the result for the terminal.

pub mod check;
pub mod locale;
pub mod paths;
pub mod set;
pub mod show;
