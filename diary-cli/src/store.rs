//! Entry files: a JSON array of stored entries, as a store would dump them.
//!
//! ```json
//! [{"date": "2024-01-01", "index": 1, "tags": ["work"], "content": "...", "diary": "home"}]
//! ```

use anyhow::{Context, Result};
use diary_core::DiaryEntry;
use serde::Deserialize;
use serde_json::Value;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct StoredEntry {
    /// Diary name or id. Only the CLI looks at it.
    #[serde(default)]
    diary: Option<Value>,
    #[serde(flatten)]
    entry: DiaryEntry,
}

impl StoredEntry {
    fn in_diary(&self, wanted: &str) -> bool {
        match &self.diary {
            Some(Value::String(name)) => name == wanted,
            Some(Value::Number(id)) => id.to_string() == wanted,
            _ => false,
        }
    }
}

/// Parses an entries file, keeping only entries of `diary` when given.
pub fn parse_entries_json(s: &str, diary: Option<&str>) -> Result<Vec<DiaryEntry>> {
    let stored: Vec<StoredEntry> = serde_json::from_str(s)?;
    Ok(stored
        .into_iter()
        .filter(|e| diary.is_none_or(|d| e.in_diary(d)))
        .map(|e| e.entry)
        .collect())
}

pub fn read_entries(path: &Path, diary: Option<&str>) -> Result<Vec<DiaryEntry>> {
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let entries =
        parse_entries_json(&s, diary).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = entries.len(), "read stored entries");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &str = r#"[
        {"date": "2024-01-01", "index": 1, "tags": ["a"], "content": "Home one", "diary": "home"},
        {"date": "2024-01-01T08:00:00Z", "index": 2, "content": "Work one", "diary": 7},
        {"date": "2024-01-02", "text": "No diary"}
    ]"#;

    #[test]
    fn reads_every_entry_without_a_filter() {
        let entries = parse_entries_json(ENTRIES, None).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].date.normalized(), "2024-01-01");
        assert_eq!(entries[2].body(), Some("No diary"));
    }

    #[test]
    fn filters_by_diary_name_or_id() {
        let home = parse_entries_json(ENTRIES, Some("home")).unwrap();
        assert_eq!(home.len(), 1);
        assert_eq!(home[0].body(), Some("Home one"));

        let work = parse_entries_json(ENTRIES, Some("7")).unwrap();
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].index, Some(2));
    }

    #[test]
    fn rejects_non_array_input() {
        assert!(parse_entries_json(r#"{"date": "2024-01-01"}"#, None).is_err());
    }
}
