//! `styles` command.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::PluginConfig;
use crate::style::StyleTarget;

/// Print the style blocks each target renders.
pub fn print_styles(target: Option<StyleTarget>, config: &PluginConfig) -> Result<()> {
    let registry = super::build_registry(config);
    let targets = target.map_or_else(|| StyleTarget::ALL.to_vec(), |t| vec![t]);

    for target in targets {
        let label = match target {
            StyleTarget::Admin => "admin",
            StyleTarget::PublicHead => "public",
        };
        let sheet = registry.render_styles(target);
        println!("{}", format!("<!-- {label} -->").dimmed());
        if sheet.is_empty() {
            println!("{}", "<!-- disabled -->".dimmed());
        } else {
            print!("{}", sheet.render());
        }
    }
    Ok(())
}
