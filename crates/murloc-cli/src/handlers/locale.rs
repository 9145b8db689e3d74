//! `locale` command handler.

use anyhow::Result;
use murloc_core::{ConfigProvider, LanguageSource, Locale};

use crate::bootstrap::CliContext;

/// Print the locale selected for `requested`.
pub fn execute(ctx: &CliContext, requested: Option<&str>) -> Result<()> {
    println!("{}", render(ctx, requested));
    Ok(())
}

pub fn render(ctx: &CliContext, requested: Option<&str>) -> String {
    let config = ctx.config.config();
    let selection = config.select_language(requested);
    let available: Vec<&str> = config.available_language().iter().map(Locale::as_str).collect();

    let source = match (selection.source, requested) {
        (LanguageSource::Requested, _) => "requested".to_string(),
        (LanguageSource::Default, Some(raw)) if !raw.trim().is_empty() => {
            format!("default; {} is not available", raw.trim())
        }
        (LanguageSource::Default, _) => "default".to_string(),
    };

    format!(
        "locale = {} ({source})\navailable = {}",
        selection.locale,
        available.join(",")
    )
}
