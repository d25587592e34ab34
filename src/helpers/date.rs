//! Date helper functions

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::fmt::Write;

/// en-US long date, e.g. "January 15, 2024"
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Reformat an ISO-8601 calendar date (`YYYY-MM-DD`) with a strftime format
///
/// Returns `None` when the input is not a calendar date or the format
/// contains an unknown specifier.
pub fn format_date(date: &str, format: &str) -> Option<String> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let mut out = String::new();
    write!(out, "{}", d.format(format)).ok()?;
    Some(out)
}

/// Whether every specifier in a strftime format is one chrono understands
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format an ISO-8601 calendar date the way en-US spells it out
///
/// # Examples
/// ```ignore
/// long_date("2024-01-15") // -> Some("January 15, 2024")
/// ```
pub fn long_date(date: &str) -> Option<String> {
    format_date(date, LONG_DATE_FORMAT)
}

/// Format a timestamp in ISO 8601 with millisecond precision, UTC designator
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_long_date() {
        assert_eq!(long_date("2024-01-15").as_deref(), Some("January 15, 2024"));
        assert_eq!(long_date("2024-01-05").as_deref(), Some("January 5, 2024"));
        assert_eq!(long_date("not a date"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-25", "%d/%m/%Y").as_deref(), Some("25/01/2024"));
        assert_eq!(format_date("2024-13-01", "%Y"), None);
        assert_eq!(format_date("2024-01-15", "%Q"), None);
    }

    #[test]
    fn test_is_valid_date_format() {
        assert!(is_valid_date_format(LONG_DATE_FORMAT));
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("%B %-d, %"));
    }

    #[test]
    fn test_iso_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 1, 20, 8, 30, 0).unwrap();
        assert_eq!(iso_timestamp(&at), "2024-01-20T08:30:00.000Z");
    }
}
