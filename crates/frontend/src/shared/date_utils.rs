/// Utilities for date formatting
///
/// Provides consistent date formatting across the HR pages
use contracts::shared::date::parse_calendar_date;

/// Format any backend date to "Sep 20, 2025"
/// Unparseable values ("--", free text) are returned as is.
pub fn format_date(date_str: &str) -> String {
    match parse_calendar_date(date_str) {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Format a start/end pair as "Sep 20, 2025 – Sep 22, 2025"
pub fn format_date_range(start: &str, end: &str) -> String {
    match (start.trim().is_empty(), end.trim().is_empty()) {
        (true, true) => "N/A".to_string(),
        (false, true) => format_date(start),
        (true, false) => format_date(end),
        (false, false) => format!("{} – {}", format_date(start), format_date(end)),
    }
}
