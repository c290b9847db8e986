//! Time utilities

use chrono::{DateTime, NaiveDateTime, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a deadline string
///
/// Accepts RFC 3339 as well as the `datetime-local` shape browsers send
/// (`2025-01-31T18:00`, optionally with seconds), which is taken as UTC.
pub fn parse_deadline(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_deadline_rfc3339() {
        let dt = parse_deadline("2025-01-15T12:00:00Z").unwrap();
        assert_eq!(dt.year(), 2025);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_deadline_datetime_local() {
        let dt = parse_deadline("2025-01-15T18:30").unwrap();
        assert_eq!(dt.minute(), 30);
        assert!(parse_deadline("2025-01-15T18:30:45").is_some());
    }

    #[test]
    fn test_parse_deadline_invalid() {
        assert!(parse_deadline("not a date").is_none());
        assert!(parse_deadline("2025-01-15").is_none());
    }
}
