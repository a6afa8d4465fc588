use crate::dates::{format_canonical, normalize_date_str};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The date of a stored entry, as the caller hands it over.
///
/// Stores keep either a real date or a string that was formatted somewhere
/// else. Both are normalized to `YYYY-MM-DD` before any comparison or rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryDate {
    Day(NaiveDate),
    Text(String),
}

impl EntryDate {
    /// Canonical `YYYY-MM-DD` form of this date.
    pub fn normalized(&self) -> String {
        match self {
            EntryDate::Day(date) => format_canonical(*date),
            EntryDate::Text(s) => normalize_date_str(s),
        }
    }
}

impl From<NaiveDate> for EntryDate {
    fn from(date: NaiveDate) -> Self {
        EntryDate::Day(date)
    }
}

impl From<&str> for EntryDate {
    fn from(s: &str) -> Self {
        EntryDate::Text(s.to_string())
    }
}

impl From<String> for EntryDate {
    fn from(s: String) -> Self {
        EntryDate::Text(s)
    }
}

/// An entry as it comes from (or goes to) the caller's store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub date: EntryDate,
    /// 1-based position among the entries sharing `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Legacy name for `content`, still found in older stores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl DiaryEntry {
    pub fn new(date: impl Into<EntryDate>, content: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            index: None,
            tags: Vec::new(),
            content: Some(content.into()),
            text: None,
        }
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The entry body. `content` wins over the legacy `text` field.
    pub fn body(&self) -> Option<&str> {
        self.content.as_deref().or(self.text.as_deref())
    }
}

/// An entry recovered from an interchange document.
///
/// Unlike [`DiaryEntry`], every field is known: the parser resolved the date,
/// numbered the entry within its day and dropped it if the content was blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEntry {
    pub date: NaiveDate,
    pub index: u32,
    pub tags: Vec<String>,
    pub content: String,
}

impl From<ParsedEntry> for DiaryEntry {
    fn from(entry: ParsedEntry) -> Self {
        DiaryEntry {
            date: EntryDate::Day(entry.date),
            index: Some(entry.index),
            tags: entry.tags,
            content: Some(entry.content),
            text: None,
        }
    }
}
