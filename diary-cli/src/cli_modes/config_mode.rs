use crate::{config::Config, render::Renderer};
use anyhow::Result;

pub fn config_mode(config: &Config, renderer: &Renderer) -> Result<()> {
    match &config.source {
        Some(path) => renderer.print_info(&format!("Format options from {}", path.display())),
        None => renderer.print_info("No config file found, using the default format."),
    }
    print!("{}", config.resolved_format_toml()?);
    Ok(())
}
