//! Renders entries into an interchange document.
//!
//! Header:  `---2024-01-01--[work,personal]` (first entry of a day)
//!          `---2--[personal]`               (later entries of the same day)
//! Block:
//!   HEADER
//!
//!   Content…
//!
//!   SEPARATOR

use crate::entry::DiaryEntry;
use crate::format_config::FormatConfig;

/// The token between the date prefix and suffix of a header.
#[derive(Debug, Clone, Copy)]
pub enum HeaderLabel<'a> {
    Date(&'a str),
    Index(u32),
}

/// `{datePrefix}{date-or-index}{dateSuffix}{tagOpenBracket}{tags}{tagCloseBracket}`
pub fn format_header(label: HeaderLabel, tags: &[String], config: &FormatConfig) -> String {
    let token = match label {
        HeaderLabel::Date(date) => date.to_string(),
        HeaderLabel::Index(index) => index.to_string(),
    };
    format!(
        "{}{}{}{}{}{}",
        config.date_prefix,
        token,
        config.date_suffix,
        config.tag_open_bracket,
        tags.join(config.tag_separator.as_str()),
        config.tag_close_bracket
    )
}

/// Render an entry block: header, blank line, content, blank line.
pub fn format_entry_block(header: &str, content: &str) -> String {
    format!("{header}\n\n{content}\n\n")
}

/// Serializes `entries` into one document.
///
/// Entries are sorted by date and then by their own index (input order breaks
/// ties, unindexed entries go last), so the caller doesn't need to pre-sort. The first entry of each day
/// carries the date in its header; the rest carry their index, or their
/// position within the day when they have none.
///
/// ```
/// # use diary_core::{DiaryEntry, FormatConfig, render::serialize_entries};
/// let entries = vec![DiaryEntry::new("2024-01-01", "Hello").with_tags(["work"]).with_index(1)];
/// let doc = serialize_entries(&entries, &FormatConfig::default());
/// assert!(doc.starts_with("---2024-01-01--[work]\n\nHello\n\n"));
/// assert!(doc.ends_with(&format!("{}\n", "-".repeat(80))));
/// ```
pub fn serialize_entries(entries: &[DiaryEntry], config: &FormatConfig) -> String {
    let mut keyed: Vec<(String, &DiaryEntry)> =
        entries.iter().map(|e| (e.date.normalized(), e)).collect();
    keyed.sort_by(|(a_date, a), (b_date, b)| {
        a_date.cmp(b_date).then(a.index.unwrap_or(u32::MAX).cmp(&b.index.unwrap_or(u32::MAX)))
    });

    let mut out = String::new();
    let mut position_in_day = 0u32;
    for (i, (date, entry)) in keyed.iter().enumerate() {
        let starts_day = i == 0 || keyed[i - 1].0 != *date;
        position_in_day = if starts_day { 1 } else { position_in_day + 1 };
        let ends_day = keyed.get(i + 1).is_none_or(|(next, _)| next != date);

        let label = if starts_day {
            HeaderLabel::Date(date)
        } else {
            HeaderLabel::Index(entry.index.unwrap_or(position_in_day))
        };
        let header = format_header(label, &entry.tags, config);
        out.push_str(&format_entry_block(&header, entry.body().unwrap_or_default()));

        let separator = if ends_day {
            &config.entry_separator
        } else {
            &config.same_day_separator
        };
        out.push_str(separator);
        out.push('\n');
        if i + 1 < keyed.len() {
            out.push('\n');
        }
    }

    tracing::debug!(entries = entries.len(), bytes = out.len(), "serialized entries");
    out
}
