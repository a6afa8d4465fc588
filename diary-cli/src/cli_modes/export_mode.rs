use crate::{config::Config, render::Renderer, store::read_entries};
use anyhow::{Context, Result};
use diary_core::export;
use std::{fs, io::Write, path::Path};

pub fn export_mode(
    entries_path: &Path,
    output: Option<&Path>,
    diary: Option<&str>,
    config: &Config,
    renderer: &Renderer,
) -> Result<()> {
    let entries = read_entries(entries_path, diary)?;
    if entries.is_empty() {
        renderer.print_info("No entries to export.");
    }
    let document = export(&entries, &config.format);

    match output {
        Some(path) => {
            fs::write(path, &document).with_context(|| format!("writing {}", path.display()))?;
            renderer.print_info(&format!(
                "Exported {} entries to {}",
                entries.len(),
                path.display()
            ));
        }
        None => {
            std::io::stdout()
                .write_all(document.as_bytes())
                .context("writing document to stdout")?;
        }
    }
    tracing::info!(count = entries.len(), "export finished");
    Ok(())
}
