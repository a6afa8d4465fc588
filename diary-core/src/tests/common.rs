use crate::{DiaryEntry, FormatConfig, FormatOption, PartialFormatConfig, ParsedEntry};

/// Test helper to build a stored entry with an index and tags.
pub fn mk_entry(date: &str, index: u32, tags: &[&str], content: &str) -> DiaryEntry {
    DiaryEntry::new(date, content)
        .with_index(index)
        .with_tags(tags.iter().copied())
}

/// `(date, index, tags, content)` of a parsed entry, for compact assertions.
pub fn summary(entry: &ParsedEntry) -> (String, u32, Vec<String>, String) {
    (
        entry.date.format("%Y-%m-%d").to_string(),
        entry.index,
        entry.tags.clone(),
        entry.content.clone(),
    )
}

/// Same shape as [`summary`], taken from a stored entry.
pub fn stored_summary(entry: &DiaryEntry) -> (String, u32, Vec<String>, String) {
    (
        entry.date.normalized(),
        entry.index.unwrap_or(1),
        entry.tags.clone(),
        entry.body().unwrap_or_default().to_string(),
    )
}

/// A configuration that shares no delimiter with the default one.
pub fn mk_custom_config() -> FormatConfig {
    let mut p = PartialFormatConfig::default();
    p.set(FormatOption::EntrySeparator, "=====");
    p.set(FormatOption::SameDaySeparator, "~~~~~");
    p.set(FormatOption::DatePrefix, "## ");
    p.set(FormatOption::DateSuffix, " ");
    p.set(FormatOption::TagOpenBracket, "(");
    p.set(FormatOption::TagCloseBracket, ")");
    p.set(FormatOption::TagSeparator, ";");
    FormatConfig::resolve(&p)
}
