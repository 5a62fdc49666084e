//! Lenient date/time entry parsing.
//!
//! User input is interpreted in local time and normalized to UTC before it
//! reaches the gateway.

use anyhow::{Result, anyhow};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %I:%M %p",
    "%Y-%m-%d %I:%M%p",
    "%m/%d/%Y %H:%M",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a user-entered date/time; bare dates resolve to local midnight.
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    for layout in DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, layout) {
            return local_to_utc(naive);
        }
    }

    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(input, layout) {
            return local_to_utc(date.and_hms_opt(0, 0, 0).unwrap());
        }
    }

    Err(anyhow!("invalid date/time format: {input}"))
}

fn local_to_utc(naive: NaiveDateTime) -> Result<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        // DST gaps make some wall-clock times ambiguous or nonexistent.
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("date/time does not exist in the local timezone"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_accepted_layouts() {
        for input in [
            "2026-01-15 10:00",
            "2026-01-15T10:00",
            "2026-01-15 3:04 PM",
            "2026-01-15 3:04PM",
            "2026-01-15",
            "01/15/2026 10:00",
            "01/15/2026",
            "  2026-01-15 10:00  ",
        ] {
            assert!(parse_datetime(input).is_ok(), "should parse: {input}");
        }
    }

    #[test]
    fn test_rejected_input() {
        for input in ["", "tomorrow", "2026-13-40", "10:00", "15-01-2026"] {
            assert!(parse_datetime(input).is_err(), "should reject: {input}");
        }
    }

    #[test]
    fn test_bare_date_is_local_midnight() {
        let parsed = parse_datetime("2026-01-15").unwrap();
        let local = parsed.with_timezone(&Local);
        assert_eq!(local.hour(), 0);
        assert_eq!(local.minute(), 0);
    }

    #[test]
    fn test_twelve_hour_clock() {
        let afternoon = parse_datetime("2026-01-15 3:04 PM").unwrap();
        let local = afternoon.with_timezone(&Local);
        assert_eq!(local.hour(), 15);
        assert_eq!(local.minute(), 4);
    }
}
