//! Finds imported entries that already exist.
//!
//! Two entries are the same when they fall on the same day and their content
//! is equal after trimming surrounding whitespace. Tags and indices are ignored.

use crate::dates::format_canonical;
use crate::entry::{DiaryEntry, ParsedEntry};
use serde::Serialize;
use std::collections::HashMap;

/// `(YYYY-MM-DD, trimmed content)`
pub type DuplicateKey<'a> = (String, &'a str);

/// Anything that can be compared for duplicates.
pub trait DuplicateCandidate {
    /// `None` when the entry has no content: such entries never match.
    /// The legacy `text` field doesn't count as content here.
    fn duplicate_key(&self) -> Option<DuplicateKey<'_>>;
}

impl DuplicateCandidate for DiaryEntry {
    fn duplicate_key(&self) -> Option<DuplicateKey<'_>> {
        let content = self.content.as_deref()?;
        Some((self.date.normalized(), content.trim()))
    }
}

impl DuplicateCandidate for ParsedEntry {
    fn duplicate_key(&self) -> Option<DuplicateKey<'_>> {
        Some((format_canonical(self.date), self.content.trim()))
    }
}

/// One match, as positions into the imported and existing slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DuplicatePair {
    pub imported: usize,
    pub existing: usize,
}

impl DuplicatePair {
    /// Looks both entries up again.
    pub fn resolve<'a, I, E>(&self, imported: &'a [I], existing: &'a [E]) -> Option<(&'a I, &'a E)> {
        Some((imported.get(self.imported)?, existing.get(self.existing)?))
    }
}

/// Reports every `(imported, existing)` pair with equal keys.
///
/// Pairs come out in imported order, then existing order. An imported entry
/// matching three existing ones yields three pairs.
///
/// ```
/// # use diary_core::{DiaryEntry, duplicates::{find_duplicates, DuplicatePair}};
/// let imported = vec![DiaryEntry::new("2024-01-01", "  Same content  ")];
/// let existing = vec![DiaryEntry::new("2024-01-01", "Same content")];
/// assert_eq!(
///     find_duplicates(&imported, &existing),
///     vec![DuplicatePair { imported: 0, existing: 0 }]
/// );
/// ```
pub fn find_duplicates<I, E>(imported: &[I], existing: &[E]) -> Vec<DuplicatePair>
where
    I: DuplicateCandidate,
    E: DuplicateCandidate,
{
    let mut by_key: HashMap<DuplicateKey<'_>, Vec<usize>> = HashMap::new();
    for (i, entry) in existing.iter().enumerate() {
        if let Some(key) = entry.duplicate_key() {
            by_key.entry(key).or_default().push(i);
        }
    }

    let pairs: Vec<DuplicatePair> = imported
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let matches = by_key.get(&entry.duplicate_key()?)?;
            Some(matches.iter().map(move |&e| DuplicatePair {
                imported: i,
                existing: e,
            }))
        })
        .flatten()
        .collect();

    tracing::debug!(
        imported = imported.len(),
        existing = existing.len(),
        duplicates = pairs.len(),
        "checked for duplicates"
    );
    pairs
}
