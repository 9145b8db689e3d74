//! `show` command handler.

use anyhow::Result;
use murloc_core::{ConfigProvider, ConfigSource};

use crate::bootstrap::CliContext;

/// Print the effective configuration as `key = value` lines or JSON.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    println!("{}", render(ctx, json)?);
    Ok(())
}

/// Render the output of `show` without printing it.
pub fn render(ctx: &CliContext, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(ctx.config.config())?);
    }

    let sources: Vec<String> = ctx.config.sources().iter().map(ConfigSource::to_string).collect();
    Ok(format!("{}\nsources = {}", ctx.config.config(), sources.join("; ")))
}
