//! The two operations callers use: [`export`] and [`import`].

use crate::duplicates::{DuplicatePair, find_duplicates};
use crate::entry::{DiaryEntry, ParsedEntry};
use crate::format_config::{FormatConfig, PartialFormatConfig};
use crate::parse_entries::{ParseOptions, SkippedBlock, parse_document_with_report};
use crate::render::serialize_entries;
use std::collections::HashSet;

/// Renders stored entries with the user's saved (possibly partial) format.
pub fn export(entries: &[DiaryEntry], format: &PartialFormatConfig) -> String {
    serialize_entries(entries, &FormatConfig::resolve(format))
}

/// What an import produced. The caller decides where the entries go and
/// whether to keep the ones flagged as duplicates.
#[derive(Debug, Default)]
pub struct ImportResult {
    pub entries: Vec<ParsedEntry>,
    /// Positions into `entries` and into the `existing` slice given to [`import`].
    pub duplicates: Vec<DuplicatePair>,
    pub skipped: Vec<SkippedBlock>,
}

impl ImportResult {
    /// Duplicate pairs as entry references.
    pub fn duplicate_pairs<'a>(
        &'a self,
        existing: &'a [DiaryEntry],
    ) -> impl Iterator<Item = (&'a ParsedEntry, &'a DiaryEntry)> + 'a {
        self.duplicates
            .iter()
            .filter_map(move |pair| pair.resolve(&self.entries, existing))
    }

    /// Imported entries that matched nothing.
    pub fn fresh_entries(&self) -> impl Iterator<Item = &ParsedEntry> {
        let flagged: HashSet<usize> = self.duplicates.iter().map(|p| p.imported).collect();
        self.entries
            .iter()
            .enumerate()
            .filter(move |(i, _)| !flagged.contains(i))
            .map(|(_, entry)| entry)
    }
}

/// Parses `text` and checks the result against `existing`.
///
/// ```
/// # use diary_core::{DiaryEntry, PartialFormatConfig, codec::import};
/// let text = format!("---2024-01-01--[]\n\nHello\n\n{}\n", "-".repeat(80));
/// let existing = vec![DiaryEntry::new("2024-01-01", "Hello")];
/// let result = import(&text, &PartialFormatConfig::default(), &existing);
/// assert_eq!(result.entries.len(), 1);
/// assert_eq!(result.duplicates.len(), 1);
/// assert_eq!(result.fresh_entries().count(), 0);
/// ```
pub fn import(text: &str, format: &PartialFormatConfig, existing: &[DiaryEntry]) -> ImportResult {
    import_with(text, format, existing, ParseOptions::default())
}

pub fn import_with(
    text: &str,
    format: &PartialFormatConfig,
    existing: &[DiaryEntry],
    options: ParseOptions,
) -> ImportResult {
    let config = FormatConfig::resolve(format);
    let parsed = parse_document_with_report(text, &config, options);
    let duplicates = find_duplicates(&parsed.entries, existing);
    if !duplicates.is_empty() {
        tracing::info!(count = duplicates.len(), "import contains entries that already exist");
    }
    ImportResult {
        entries: parsed.entries,
        duplicates,
        skipped: parsed.skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format_config::FormatOption;

    #[test]
    fn export_uses_defaults_for_missing_options() {
        let mut format = PartialFormatConfig::default();
        format.set(FormatOption::TagSeparator, " | ");
        let entries = vec![DiaryEntry::new("2024-01-01", "x").with_tags(["a", "b"]).with_index(1)];
        let doc = export(&entries, &format);
        assert!(doc.starts_with("---2024-01-01--[a | b]\n"));
    }

    #[test]
    fn import_reports_duplicates_and_fresh_entries() {
        let existing = vec![
            DiaryEntry::new("2024-01-01", "Old news").with_index(1),
            DiaryEntry::new("2024-01-03", "Unrelated").with_index(1),
        ];
        let doc = export(
            &[
                DiaryEntry::new("2024-01-01", "  Old news ").with_index(1),
                DiaryEntry::new("2024-01-01", "Fresh").with_index(2),
            ],
            &PartialFormatConfig::default(),
        );

        let result = import(&doc, &PartialFormatConfig::default(), &existing);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.duplicates, vec![DuplicatePair { imported: 0, existing: 0 }]);

        let pairs: Vec<_> = result.duplicate_pairs(&existing).collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1.body(), Some("Old news"));

        let fresh: Vec<&str> = result.fresh_entries().map(|e| e.content.as_str()).collect();
        assert_eq!(fresh, vec!["Fresh"]);
    }

    #[test]
    fn import_of_partly_corrupt_file_keeps_good_entries() {
        let doc = format!(
            "garbage header\n\nblah\n\n{d}\n\n---2024-01-01--[]\n\nGood\n\n{d}\n",
            d = "-".repeat(80)
        );
        let result = import(&doc, &PartialFormatConfig::default(), &[]);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.skipped.len(), 1);
        assert!(result.duplicates.is_empty());
    }
}
