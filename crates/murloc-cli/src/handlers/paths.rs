//! `paths` command handler.

use anyhow::Result;
use murloc_core::{ConfigProvider, ResolvedPaths};

use crate::bootstrap::CliContext;

/// Resolve and print every launcher path in `key = value` format.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let paths = ResolvedPaths::resolve(ctx.config.config())?;
    println!("{paths}");
    Ok(())
}
