use super::common::{mk_custom_config, mk_entry, stored_summary, summary};
use crate::{
    DiaryEntry, FormatConfig, FormatOption, PartialFormatConfig, export, import, parse_document,
    serialize_entries,
};

fn assert_round_trip(entries: &[DiaryEntry], config: &FormatConfig) {
    let doc = serialize_entries(entries, config);
    let parsed = parse_document(&doc, config);
    let got: Vec<_> = parsed.iter().map(summary).collect();
    let expected: Vec<_> = entries.iter().map(stored_summary).collect();
    assert_eq!(got, expected, "document was:\n{doc}");
}

fn journal() -> Vec<DiaryEntry> {
    vec![
        mk_entry("2024-01-01", 1, &["work", "personal"], "New year, new notebook."),
        mk_entry("2024-01-01", 2, &[], "Evening:\n\n- walked\n- read"),
        mk_entry("2024-01-01", 3, &["late"], "  indented first line\nand a tail"),
        mk_entry("2024-01-05", 1, &["dup", "dup"], "Tags may repeat."),
        mk_entry("2024-02-29", 1, &["leap"], "Leap day.\n"),
    ]
}

#[test]
fn default_format_round_trip() {
    assert_round_trip(&journal(), &FormatConfig::default());
}

#[test]
fn custom_format_round_trip() {
    assert_round_trip(&journal(), &mk_custom_config());
}

#[test]
fn custom_brackets_render_and_parse_back() {
    let mut p = PartialFormatConfig::default();
    p.set(FormatOption::TagSeparator, ";");
    p.set(FormatOption::TagOpenBracket, "(");
    p.set(FormatOption::TagCloseBracket, ")");
    let entries = vec![mk_entry("2024-01-01", 1, &["work", "personal"], "Body")];

    let doc = export(&entries, &p);
    assert!(doc.contains("(work;personal)"));

    let result = import(&doc, &p, &[]);
    assert_eq!(result.entries[0].tags, vec!["work", "personal"]);
}

#[test]
fn crlf_round_trip() {
    let config = FormatConfig::default();
    let doc = serialize_entries(&journal(), &config).replace('\n', "\r\n");
    let parsed = parse_document(&doc, &config);
    let got: Vec<_> = parsed.iter().map(summary).collect();
    let expected: Vec<_> = journal().iter().map(stored_summary).collect();
    assert_eq!(got, expected);
}

#[test]
fn reimporting_an_export_flags_everything() {
    let stored = journal();
    let doc = export(&stored, &PartialFormatConfig::default());
    let result = import(&doc, &PartialFormatConfig::default(), &stored);
    assert_eq!(result.entries.len(), stored.len());
    assert_eq!(result.duplicates.len(), stored.len());
    assert_eq!(result.fresh_entries().count(), 0);
    for pair in &result.duplicates {
        assert_eq!(pair.imported, pair.existing);
    }
}

#[test]
fn unsorted_input_comes_back_sorted() {
    let mut stored = journal();
    stored.reverse();
    let doc = serialize_entries(&stored, &FormatConfig::default());
    let parsed = parse_document(&doc, &FormatConfig::default());
    let got: Vec<_> = parsed.iter().map(summary).collect();
    let expected: Vec<_> = journal().iter().map(stored_summary).collect();
    assert_eq!(got, expected);
}

#[test]
fn whitespace_delimiters_round_trip() {
    let mut p = PartialFormatConfig::default();
    p.set(FormatOption::DatePrefix, "  ");
    let leading_prefix = FormatConfig::resolve(&p);
    assert_round_trip(&journal(), &leading_prefix);

    let mut p = PartialFormatConfig::default();
    p.set(FormatOption::TagCloseBracket, "] ");
    let trailing_bracket = FormatConfig::resolve(&p);
    assert_round_trip(&journal(), &trailing_bracket);
}

#[test]
fn padded_and_empty_tags_round_trip() {
    let entries = vec![mk_entry("2024-01-01", 1, &[" padded", "", "x "], "Body")];
    assert_round_trip(&entries, &FormatConfig::default());
}

#[test]
fn unindexed_entry_keeps_its_place_after_indexed_ones() {
    let entries = vec![
        DiaryEntry::new("2024-01-01", "loose"),
        mk_entry("2024-01-01", 1, &[], "first"),
    ];
    let doc = serialize_entries(&entries, &FormatConfig::default());
    let parsed = parse_document(&doc, &FormatConfig::default());
    let got: Vec<(u32, &str)> = parsed.iter().map(|e| (e.index, e.content.as_str())).collect();
    assert_eq!(got, vec![(1, "first"), (2, "loose")]);
}
