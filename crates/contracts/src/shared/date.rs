//! Lenient calendar-date parsing for list sorting.
//!
//! The backend is not consistent about date formats: the leave-status feed
//! sends `2025-09-20`, `applied_on` arrives as `2025-09-10 09:12`, and the
//! leave-request feed pre-formats dates for display as `Sep 20, 2025`.
//! Everything is reduced to a [`NaiveDate`] so the time of day never
//! influences ordering.

use chrono::NaiveDate;

const DISPLAY_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%d.%m.%Y"];

/// Parse a calendar date, ignoring any time component.
///
/// Returns `None` for empty strings, placeholders like `--`, and anything
/// that is not recognised as a date.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    // ISO date or ISO date-time ("2025-09-20", "2025-09-20T10:00:00Z", "2025-09-20 10:00")
    if let Some(prefix) = value.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(date);
        }
    }

    DISPLAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(parse_calendar_date("2025-01-10"), Some(ymd(2025, 1, 10)));
        assert_eq!(
            parse_calendar_date("2025-09-10 09:12"),
            Some(ymd(2025, 9, 10))
        );
        assert_eq!(
            parse_calendar_date("2024-03-15T14:02:26.123Z"),
            Some(ymd(2024, 3, 15))
        );
    }

    #[test]
    fn test_display_dates() {
        assert_eq!(parse_calendar_date("Sep 20, 2025"), Some(ymd(2025, 9, 20)));
        assert_eq!(
            parse_calendar_date("September 5, 2025"),
            Some(ymd(2025, 9, 5))
        );
        assert_eq!(parse_calendar_date("15.03.2024"), Some(ymd(2024, 3, 15)));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("--"), None);
        assert_eq!(parse_calendar_date("2025-13-40"), None);
        assert_eq!(parse_calendar_date("not a date"), None);
    }
}
