use crate::{config::Config, render::Renderer, store::read_entries};
use anyhow::{Context, Result};
use diary_core::{
    DiaryEntry, ImportResult, ParsedEntry,
    codec::import_with,
    parse_entries::{IndexPolicy, ParseOptions, SkippedBlock},
};
use serde::Serialize;
use std::{fs, path::PathBuf};

pub struct ImportArgs {
    pub file: PathBuf,
    pub existing: Option<PathBuf>,
    pub skip_duplicates: bool,
    pub sequential_index: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct DuplicateView<'a> {
    imported: &'a ParsedEntry,
    existing: &'a DiaryEntry,
}

#[derive(Serialize)]
struct ImportReport<'a> {
    entries: Vec<&'a ParsedEntry>,
    duplicates: Vec<DuplicateView<'a>>,
    skipped: &'a [SkippedBlock],
}

pub fn import_mode(args: &ImportArgs, config: &Config, renderer: &Renderer) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let existing = match &args.existing {
        Some(path) => read_entries(path, None)?,
        None => Vec::new(),
    };
    let options = ParseOptions {
        index_policy: if args.sequential_index {
            IndexPolicy::Sequential
        } else {
            IndexPolicy::TrustHeader
        },
    };

    let result = import_with(&text, &config.format, &existing, options);
    let entries: Vec<&ParsedEntry> = if args.skip_duplicates {
        result.fresh_entries().collect()
    } else {
        result.entries.iter().collect()
    };

    if args.json {
        print_json(&result, entries, &existing)
    } else {
        print_summary(renderer, &result, &entries, &existing);
        Ok(())
    }
}

fn print_json(
    result: &ImportResult,
    entries: Vec<&ParsedEntry>,
    existing: &[DiaryEntry],
) -> Result<()> {
    let report = ImportReport {
        entries,
        duplicates: result
            .duplicate_pairs(existing)
            .map(|(imported, existing)| DuplicateView { imported, existing })
            .collect(),
        skipped: &result.skipped,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_summary(
    renderer: &Renderer,
    result: &ImportResult,
    entries: &[&ParsedEntry],
    existing: &[DiaryEntry],
) {
    for block in &result.skipped {
        renderer.print_skipped(block);
    }
    for (imported, existing) in result.duplicate_pairs(existing) {
        renderer.print_duplicate(imported, existing);
    }
    for entry in entries {
        renderer.print_entry_line(entry);
    }
    renderer.print_info(&format!(
        "{} entries read, {} duplicate matches, {} blocks skipped.",
        result.entries.len(),
        result.duplicates.len(),
        result.skipped.len()
    ));
}
