//! Parsing of the render timestamp.

use chrono::{DateTime, Utc};

/// Parse an RFC 3339 timestamp, or take the current time when none is given.
pub fn parse_render_time(value: Option<&str>) -> Result<DateTime<Utc>, chrono::ParseError> {
    match value {
        Some(text) => Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};

    use super::*;

    #[test]
    fn test_parse_utc() {
        let t = parse_render_time(Some("2024-08-08T09:23:00Z")).unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2024, 8, 8, 9, 23, 0).unwrap());
    }

    #[test]
    fn test_parse_offset_is_converted() {
        let t = parse_render_time(Some("2024-08-08T11:23:00+02:00")).unwrap();
        assert_eq!(t.hour(), 9);
    }

    #[test]
    fn test_invalid_time() {
        assert!(parse_render_time(Some("yesterday")).is_err());
    }

    #[test]
    fn test_default_is_now() {
        let before = Utc::now();
        let t = parse_render_time(None).unwrap();
        assert!(t >= before);
    }
}
