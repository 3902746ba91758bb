//! Date helpers shared by the derivation components.
//!
//! All arithmetic works on naive calendar dates at midnight; differences are
//! whole days with no daylight-saving adjustment.

use crate::error::{Result, TypikonError};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Build a date, rolling an overlong day into the following month(s).
///
/// `civil_date(2021, 2, 30)` is 2021-03-02. `day` must be at least 1.
pub fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let out_of_range = || TypikonError::DateOutOfRange { year, month, day };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
    first
        .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
        .ok_or_else(out_of_range)
}

/// Shift a date by a signed number of days.
pub fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date + chrono::Duration::days(days)
}

/// Whole days from `from` to `to` (negative when `to` precedes `from`).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Whole weeks from `from` to `to`, floored.
pub fn weeks_between(from: NaiveDate, to: NaiveDate) -> i64 {
    days_between(from, to).div_euclid(7)
}

/// Liturgical weekday number: Sunday = 1 .. Saturday = 7.
pub fn weekday_number(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8 + 1
}

/// Three-letter weekday abbreviation used in reports.
pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

/// Ordinal suffix by last digit ("1st", "2nd", "3rd", "11st" included).
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Month-day-year rendering used in reports (no zero padding).
pub fn format_mdy(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_civil_date_plain() {
        assert_eq!(civil_date(2020, 4, 19).unwrap(), ymd(2020, 4, 19));
    }

    #[test]
    fn test_civil_date_rolls_over() {
        assert_eq!(civil_date(2021, 2, 30).unwrap(), ymd(2021, 3, 2));
        assert_eq!(civil_date(2020, 2, 30).unwrap(), ymd(2020, 3, 1));
        assert_eq!(civil_date(2020, 4, 31).unwrap(), ymd(2020, 5, 1));
        assert_eq!(civil_date(2020, 5, 68).unwrap(), ymd(2020, 7, 7));
    }

    #[test]
    fn test_civil_date_invalid_month() {
        assert!(matches!(
            civil_date(2020, 13, 1),
            Err(TypikonError::DateOutOfRange { month: 13, .. })
        ));
    }

    #[test]
    fn test_days_and_weeks_between() {
        let a = ymd(2020, 4, 19);
        let b = ymd(2020, 4, 26);
        assert_eq!(days_between(a, b), 7);
        assert_eq!(days_between(b, a), -7);
        assert_eq!(weeks_between(a, b), 1);
        assert_eq!(weeks_between(a, shift(a, 13)), 1);
        assert_eq!(weeks_between(a, shift(a, -1)), -1);
    }

    #[test]
    fn test_weekday_number() {
        assert_eq!(weekday_number(Weekday::Sun), 1);
        assert_eq!(weekday_number(Weekday::Tue), 3);
        assert_eq!(weekday_number(Weekday::Sat), 7);
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(21), "st");
    }

    #[test]
    fn test_format_mdy() {
        assert_eq!(format_mdy(ymd(2019, 9, 5)), "9/5/2019");
    }
}
