//! Calendar-date helpers for event scheduling.
//!
//! The weekday label stored on an event is always derived from its date;
//! the two fields are never set independently of each other.

use chrono::{Datelike, NaiveDate, Weekday};

/// English weekday name for a calendar date ("Monday".."Sunday").
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_monday() {
        assert_eq!(weekday_name(date(2025, 6, 2)), "Monday");
    }

    #[test]
    fn full_week() {
        // 2025-06-02 is a Monday; walk the whole week.
        let expected = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        for (offset, name) in expected.iter().enumerate() {
            let d = date(2025, 6, 2) + chrono::Duration::days(offset as i64);
            assert_eq!(weekday_name(d), *name);
        }
    }

    #[test]
    fn leap_day() {
        assert_eq!(weekday_name(date(2024, 2, 29)), "Thursday");
    }
}
