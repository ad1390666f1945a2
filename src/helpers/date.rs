//! Date helper functions

use chrono::{Local, NaiveDate, NaiveDateTime};

/// The one date pattern accepted in front matter
pub const POST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable rendering used for `Post::formatted_date`
pub const FULL_DATE_FORMAT: &str = "%B %d, %Y";

/// Source of "now" for defaulted post dates
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Parse a `YYYY-MM-DD` date string into midnight of that day
pub fn parse_post_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(s.trim(), POST_DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format a date the way it is written in front matter
pub fn format_post_date(date: &NaiveDateTime) -> String {
    date.format(POST_DATE_FORMAT).to_string()
}

/// Format date in full format (like "January 15, 2024")
pub fn full_date(date: &NaiveDateTime) -> String {
    date.format(FULL_DATE_FORMAT).to_string()
}

/// Format a date with a chrono format string
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    date.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_post_date() {
        assert_eq!(parse_post_date("2024-01-15"), Some(date(2024, 1, 15)));
        assert_eq!(parse_post_date(" 2025-04-24 "), Some(date(2025, 4, 24)));
        assert_eq!(parse_post_date("2024/01/15"), None);
        assert_eq!(parse_post_date("2024-02-30"), None);
        assert_eq!(parse_post_date("soon"), None);
    }

    #[test]
    fn test_full_date() {
        assert_eq!(full_date(&date(2024, 1, 15)), "January 15, 2024");
        assert_eq!(full_date(&date(2025, 4, 24)), "April 24, 2025");
        assert_eq!(full_date(&date(2024, 3, 1)), "March 01, 2024");
    }

    #[test]
    fn test_format_post_date() {
        assert_eq!(format_post_date(&date(2024, 3, 1)), "2024-03-01");
        assert_eq!(format_date(&date(2024, 3, 1), "%d/%m/%Y"), "01/03/2024");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2024, 6, 1));
        assert_eq!(clock.now(), date(2024, 6, 1));
    }
}
