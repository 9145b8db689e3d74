//! `check` command handler.
//!
//! Loading already validates, so reaching this handler means the
//! configuration is valid. Failures surface from `bootstrap` with exit code 78.

use anyhow::Result;
use murloc_core::ConfigProvider;

use crate::bootstrap::CliContext;

pub fn execute(ctx: &CliContext) -> Result<()> {
    let config = ctx.config.config();
    println!("✓ Configuration is valid");
    println!(
        "  {} locale(s), default {}, patch list at {}",
        config.available_language().len(),
        config.default_language(),
        config.patchlist_url()?
    );
    for source in ctx.config.sources() {
        println!("  from {source}");
    }
    Ok(())
}
