use super::theme::OneDark;
use diary_core::{DiaryEntry, ParsedEntry, parse_entries::SkippedBlock};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

const PREVIEW_CHARS: usize = 60;

/// Results go to stdout; info and warnings go to stderr so a document written
/// to stdout stays clean.
pub struct Renderer {
    skin: MadSkin,
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        Self {
            skin: OneDark::skin(),
            use_color,
        }
    }

    pub fn print_info(&self, message: &str) {
        eprintln!("{}", self.info_line(message));
    }

    /// Messages carry file paths, so they are styled as plain text, never as markdown.
    fn info_line(&self, message: &str) -> String {
        if self.use_color {
            self.skin.paragraph.compound_style.apply_to(message).to_string()
        } else {
            message.to_string()
        }
    }

    pub fn print_warning(&self, message: &str) {
        let label = if self.use_color {
            "warning:".to_string().with(Color::Yellow).to_string()
        } else {
            "warning:".to_string()
        };
        eprintln!("{label} {message}");
    }

    pub fn print_entry_line(&self, entry: &ParsedEntry) {
        println!("{}", self.entry_line(entry));
    }

    pub fn print_duplicate(&self, imported: &ParsedEntry, existing: &DiaryEntry) {
        let existing_index = existing
            .index
            .map(|i| format!(" #{i}"))
            .unwrap_or_default();
        self.print_warning(&format!(
            "{} already exists as {}{}",
            self.entry_line(imported),
            existing.date.normalized(),
            existing_index
        ));
    }

    pub fn print_skipped(&self, block: &SkippedBlock) {
        self.print_warning(&format!(
            "line {}: skipped `{}`: {}",
            block.line, block.header, block.reason
        ));
    }

    /// `2024-01-01 #2 [work, personal] First line of content…`
    fn entry_line(&self, entry: &ParsedEntry) -> String {
        let mut date = entry.date.format("%Y-%m-%d").to_string();
        let mut index = format!("#{}", entry.index);
        let mut tags = String::new();
        if !entry.tags.is_empty() {
            tags = format!("[{}] ", entry.tags.join(", "));
        }
        let mut preview = content_preview(&entry.content);
        if self.use_color {
            date = date.with(Color::Cyan).to_string();
            index = index.with(Color::Blue).to_string();
            tags = tags.with(Color::Green).to_string();
            preview = preview.with(Color::Yellow).to_string();
        }
        format!("{date} {index} {tags}{preview}")
    }
}

/// First non-blank line, cut at `PREVIEW_CHARS` characters.
fn content_preview(content: &str) -> String {
    let first = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default();
    let more = first.chars().count() > PREVIEW_CHARS || content.trim().lines().nth(1).is_some();
    let mut preview: String = first.chars().take(PREVIEW_CHARS).collect();
    if more {
        preview.push('…');
    }
    preview
}
