use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// The only date pattern the codec writes and compares: `YYYY-MM-DD`.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as the canonical `YYYY-MM-DD` string.
pub fn format_canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

/// Parses a strict canonical `YYYY-MM-DD` string.
///
/// Returns `None` for anything that isn't a real calendar day (e.g. `2024-02-30`).
pub fn parse_canonical(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, CANONICAL_DATE_FORMAT).ok()
}

/// Normalizes a pre-formatted date string to `YYYY-MM-DD`.
///
/// Stored entries arrive with dates that were formatted elsewhere, so this
/// accepts, in order:
/// 1. A canonical date (`2024-01-01`).
/// 2. An RFC 3339 timestamp (`2024-01-01T10:00:00Z`); the date part is kept as written.
/// 3. A naive timestamp (`2024-01-01T10:00:00` or `2024-01-01 10:00:00`).
///
/// Anything else is returned trimmed but otherwise unchanged, so two unknown
/// strings still compare equal when they are written the same way.
///
/// # Examples
///
/// ```
/// # use diary_core::dates::normalize_date_str;
/// assert_eq!(normalize_date_str("2024-01-01"), "2024-01-01");
/// assert_eq!(normalize_date_str(" 2024-01-01T23:30:00+02:00 "), "2024-01-01");
/// assert_eq!(normalize_date_str("2024-01-01 08:15:00"), "2024-01-01");
/// assert_eq!(normalize_date_str("someday"), "someday");
/// ```
pub fn normalize_date_str(s: &str) -> String {
    let s = s.trim();
    if let Some(date) = parse_canonical(s) {
        return format_canonical(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return format_canonical(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| format_canonical(dt.date()))
        .unwrap_or_else(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_round_trip() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_canonical(d), "2024-03-07");
        assert_eq!(parse_canonical("2024-03-07"), Some(d));
    }

    #[test]
    fn parse_canonical_rejects_impossible_days() {
        assert_eq!(parse_canonical("2024-02-30"), None);
        assert_eq!(parse_canonical("2024-13-01"), None);
        assert_eq!(parse_canonical("07/03/2024"), None);
    }

    #[test]
    fn normalize_keeps_date_part_of_timestamps() {
        assert_eq!(normalize_date_str("2024-01-01T00:00:00.000Z"), "2024-01-01");
        assert_eq!(normalize_date_str("2024-01-01T10:20:30"), "2024-01-01");
        assert_eq!(normalize_date_str("2024-01-01 10:20:30.5"), "2024-01-01");
    }

    #[test]
    fn normalize_passes_unknown_strings_through_trimmed() {
        assert_eq!(normalize_date_str("  not a date "), "not a date");
    }
}
