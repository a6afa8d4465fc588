//! Plain-text interchange for diary entries.
//!
//! [`export`] turns stored entries into a portable document; [`import`] reads
//! such a document back and flags entries that already exist. Everything here
//! is pure: no I/O and no shared state.

pub mod codec;
pub mod dates;
pub mod duplicates;
pub mod entry;
pub mod format_config;
pub mod parse_entries;
pub mod render;

#[cfg(test)]
mod tests;

pub use codec::{ImportResult, export, import};
pub use duplicates::{DuplicatePair, find_duplicates};
pub use entry::{DiaryEntry, EntryDate, ParsedEntry};
pub use format_config::{DEFAULT_FORMAT, FormatConfig, FormatOption, PartialFormatConfig};
pub use parse_entries::{ParseResult, parse_document, parse_document_with_report};
pub use render::serialize_entries;
