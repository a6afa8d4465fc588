//! Parses an interchange document into structured `ParsedEntry` objects.
//!
//! Parsing runs in three passes: line endings are normalized, the text is cut
//! into blocks at separator lines, and each block is read as one header plus
//! content. Nothing here fails: a block that can't be read is left out of the
//! result and reported in [`ParseResult::skipped`].

use crate::dates::parse_canonical;
use crate::entry::ParsedEntry;
use crate::format_config::FormatConfig;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Leading header token: a `YYYY-MM-DD`-shaped date or a bare number.
static HEADER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?P<date>\d{4}-\d{2}-\d{2})|(?P<index>\d+))").unwrap());

/// What a header says about where its entry belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderToken {
    /// Starts a new day.
    Date(NaiveDate),
    /// Continues the current day at this index.
    Index(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub token: HeaderToken,
    pub tags: Vec<String>,
}

/// How the index of a continuation entry is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Use the number written in the header (`---5--[]` gives index 5).
    #[default]
    TrustHeader,
    /// Ignore the written number and count entries in document order.
    Sequential,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub index_policy: IndexPolicy,
}

/// Why a block produced no entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    MalformedHeader,
    InvalidDate,
    InvalidIndex,
    OrphanIndex,
    EmptyContent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SkipReason::MalformedHeader => "header doesn't match `PREFIX{date|index}SUFFIX[tags]`",
            SkipReason::InvalidDate => "header date is not a real calendar day",
            SkipReason::InvalidIndex => "header index must be a positive number",
            SkipReason::OrphanIndex => "continuation header appears before any date header",
            SkipReason::EmptyContent => "entry has no content",
        };
        f.write_str(msg)
    }
}

/// A block left out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBlock {
    /// 1-based line of the block's header in the normalized document.
    pub line: usize,
    pub header: String,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct ParseResult {
    pub entries: Vec<ParsedEntry>,
    pub skipped: Vec<SkippedBlock>,
}

/// The lines between two separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// 1-based line number of `lines[0]`.
    pub start_line: usize,
    pub lines: Vec<&'a str>,
}

/// The day currently being read and the index the next entry would get.
#[derive(Debug, Default)]
struct RunState {
    current_date: Option<NaiveDate>,
    next_index: u32,
}

impl RunState {
    fn advance(&mut self, token: HeaderToken, policy: IndexPolicy) -> Option<(NaiveDate, u32)> {
        match token {
            HeaderToken::Date(date) => {
                self.current_date = Some(date);
                self.next_index = 2;
                Some((date, 1))
            }
            HeaderToken::Index(written) => {
                let date = self.current_date?;
                let index = match policy {
                    IndexPolicy::TrustHeader => written,
                    IndexPolicy::Sequential => self.next_index,
                };
                self.next_index = index.saturating_add(1);
                Some((date, index))
            }
        }
    }
}

/// Rewrites `\r\n` and lone `\r` as `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn is_separator(line: &str, config: &FormatConfig) -> bool {
    let line = line.trim_end();
    [&config.entry_separator, &config.same_day_separator]
        .iter()
        .any(|sep| !sep.is_empty() && line == sep.trim_end())
}

/// Cuts `text` into blocks at lines equal to either separator.
///
/// Separator lines are dropped. Empty separators never match, otherwise every
/// blank line would end a block. `text` is expected to use `\n` line endings.
pub fn split_blocks<'a>(text: &'a str, config: &FormatConfig) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut current = Block {
        start_line: 1,
        lines: Vec::new(),
    };
    for (i, line) in text.lines().enumerate() {
        if is_separator(line, config) {
            let next = Block {
                start_line: i + 2,
                lines: Vec::new(),
            };
            blocks.push(std::mem::replace(&mut current, next));
        } else {
            current.lines.push(line);
        }
    }
    blocks.push(current);
    blocks
}

/// Tags are opaque: they come back exactly as written between separators.
fn parse_tags(list: &str, separator: &str) -> Vec<String> {
    if list.is_empty() {
        return Vec::new();
    }
    if separator.is_empty() {
        return vec![list.to_string()];
    }
    list.split(separator).map(str::to_string).collect()
}

/// Reads one header line.
///
/// The line is matched exactly first. When that fails and the line has
/// surrounding whitespace, the trimmed line is tried, which accepts hand-edited
/// headers with stray indentation. Tags are kept verbatim; the only lossy case
/// is a single empty tag, which renders as an empty bracket pair and reads back
/// as no tags.
///
/// # Examples
///
/// ```
/// # use diary_core::FormatConfig;
/// # use diary_core::parse_entries::{parse_header, HeaderToken};
/// let config = FormatConfig::default();
/// let header = parse_header("---2--[personal]", &config).unwrap();
/// assert_eq!(header.token, HeaderToken::Index(2));
/// assert_eq!(header.tags, vec!["personal".to_string()]);
/// assert!(parse_header("## Not a header", &config).is_err());
/// ```
pub fn parse_header(line: &str, config: &FormatConfig) -> Result<Header, SkipReason> {
    match parse_header_exact(line, config) {
        Err(SkipReason::MalformedHeader) if line.trim() != line => {
            parse_header_exact(line.trim(), config)
        }
        parsed => parsed,
    }
}

/// Matches `line` as is, so prefixes and brackets made of whitespace still line up
/// with what the serializer wrote.
fn parse_header_exact(line: &str, config: &FormatConfig) -> Result<Header, SkipReason> {
    let rest = line
        .strip_prefix(config.date_prefix.as_str())
        .and_then(|rest| rest.strip_suffix(config.tag_close_bracket.as_str()))
        .ok_or(SkipReason::MalformedHeader)?;

    let caps = HEADER_TOKEN
        .captures(rest)
        .ok_or(SkipReason::MalformedHeader)?;
    let token_len = caps.get(0).map_or(0, |m| m.end());
    let tag_list = rest[token_len..]
        .strip_prefix(config.date_suffix.as_str())
        .and_then(|rest| rest.strip_prefix(config.tag_open_bracket.as_str()))
        .ok_or(SkipReason::MalformedHeader)?;

    let token = if let Some(date) = caps.name("date") {
        HeaderToken::Date(parse_canonical(date.as_str()).ok_or(SkipReason::InvalidDate)?)
    } else {
        let index = caps
            .name("index")
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .ok_or(SkipReason::InvalidIndex)?;
        HeaderToken::Index(index)
    };

    Ok(Header {
        token,
        tags: parse_tags(tag_list, &config.tag_separator),
    })
}

/// Everything after the header, minus one leading and one trailing blank line.
fn block_content(lines: &[&str]) -> String {
    let mut body = lines;
    if let [first, rest @ ..] = body {
        if first.trim().is_empty() {
            body = rest;
        }
    }
    if let [rest @ .., last] = body {
        if last.trim().is_empty() {
            body = rest;
        }
    }
    body.join("\n")
}

/// Parses `text` into entries, dropping unreadable or empty blocks.
///
/// ```
/// # use diary_core::{FormatConfig, parse_entries::parse_document};
/// let doc = "---2024-01-01--[work,personal]\nThis is an entry.\n\n".to_string() + &"-".repeat(80);
/// let entries = parse_document(&doc, &FormatConfig::default());
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].tags, vec!["work", "personal"]);
/// assert_eq!(entries[0].content, "This is an entry.");
/// assert_eq!(entries[0].index, 1);
/// ```
pub fn parse_document(text: &str, config: &FormatConfig) -> Vec<ParsedEntry> {
    parse_document_with_report(text, config, ParseOptions::default()).entries
}

/// Same as [`parse_document`], also reporting every block that was left out.
pub fn parse_document_with_report(
    text: &str,
    config: &FormatConfig,
    options: ParseOptions,
) -> ParseResult {
    let text = normalize_line_endings(text);
    let mut result = ParseResult::default();
    let mut run = RunState::default();

    for block in split_blocks(&text, config) {
        let Some(offset) = block.lines.iter().position(|l| !l.trim().is_empty()) else {
            continue;
        };
        let header_line = block.lines[offset];
        let line = block.start_line + offset;
        let mut skip = |reason: SkipReason| {
            tracing::debug!(line, header = header_line, %reason, "skipping block");
            result.skipped.push(SkippedBlock {
                line,
                header: header_line.trim().to_string(),
                reason,
            });
        };

        let header = match parse_header(header_line, config) {
            Ok(header) => header,
            Err(reason) => {
                skip(reason);
                continue;
            }
        };
        let Some((date, index)) = run.advance(header.token, options.index_policy) else {
            skip(SkipReason::OrphanIndex);
            continue;
        };

        let content = block_content(&block.lines[offset + 1..]);
        if content.trim().is_empty() {
            skip(SkipReason::EmptyContent);
            continue;
        }

        result.entries.push(ParsedEntry {
            date,
            index,
            tags: header.tags,
            content,
        });
    }

    tracing::debug!(
        entries = result.entries.len(),
        skipped = result.skipped.len(),
        "parsed document"
    );
    result
}
