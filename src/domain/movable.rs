//! Movable feasts derived from Pascha

use crate::domain::date::shift;
use crate::domain::pascha::PaschaDates;
use chrono::NaiveDate;

/// The Triodion starts ten weeks before Pascha with the Sunday of the
/// Publican and Pharisee.
pub const TRIODION_LENGTH_DAYS: i64 = 70;

/// Pentecost falls seven weeks after Pascha.
pub const PENTECOST_OFFSET_DAYS: i64 = 49;

/// All Saints is the Sunday after Pentecost and closes the Pentecostarion.
pub const ALL_SAINTS_OFFSET_DAYS: i64 = 56;

/// Clean Monday: seven weeks before Pascha, plus one day.
pub const CLEAN_MONDAY_OFFSET_DAYS: i64 = 48;

/// Feasts and season boundaries that move with Pascha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovableFeasts {
    pub triodion_start_this_year: NaiveDate,
    pub triodion_start_last_year: NaiveDate,
    pub triodion_start_next_year: NaiveDate,
    /// Start of the most recently begun Triodion.
    pub triodion_start_last: NaiveDate,
    pub palm_sunday: NaiveDate,
    pub palm_sunday_next: NaiveDate,
    pub pentecost: NaiveDate,
    pub all_saints_this_year: NaiveDate,
    pub all_saints_last_year: NaiveDate,
    pub great_lent_start: NaiveDate,
    pub thomas_sunday: NaiveDate,
    pub lazarus_saturday_next: NaiveDate,
    pub is_triodion: bool,
    pub is_pentecostarion: bool,
    pub is_pascha: bool,
}

impl MovableFeasts {
    /// Derive the movable feasts as seen from `target`.
    pub fn derive(target: NaiveDate, pascha: &PaschaDates) -> Self {
        let triodion_start_this_year = triodion_start(pascha.this_year);
        let triodion_start_last_year = triodion_start(pascha.last_year);
        let triodion_start_next_year = triodion_start(pascha.next_year);
        let triodion_start_last = if target < triodion_start_this_year {
            triodion_start_last_year
        } else {
            triodion_start_this_year
        };

        let all_saints_this_year = shift(pascha.this_year, ALL_SAINTS_OFFSET_DAYS);
        let all_saints_last_year = shift(pascha.last_year, ALL_SAINTS_OFFSET_DAYS);

        let is_pentecostarion = pascha.this_year <= target && target <= all_saints_this_year;
        let is_triodion = triodion_start_this_year <= target && target < pascha.this_year;

        MovableFeasts {
            triodion_start_this_year,
            triodion_start_last_year,
            triodion_start_next_year,
            triodion_start_last,
            palm_sunday: shift(pascha.this_year, -7),
            palm_sunday_next: shift(pascha.next, -7),
            pentecost: shift(pascha.this_year, PENTECOST_OFFSET_DAYS),
            all_saints_this_year,
            all_saints_last_year,
            great_lent_start: shift(pascha.this_year, -CLEAN_MONDAY_OFFSET_DAYS),
            thomas_sunday: shift(pascha.last, 7),
            lazarus_saturday_next: shift(pascha.next, -8),
            is_triodion,
            is_pentecostarion,
            is_pascha: target == pascha.this_year,
        }
    }
}

/// First day of the Triodion for the given Pascha.
pub fn triodion_start(pascha: NaiveDate) -> NaiveDate {
    shift(pascha, -TRIODION_LENGTH_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::CalendarSystem;
    use chrono::Weekday;
    use chrono::Datelike;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn feasts(target: NaiveDate) -> MovableFeasts {
        let pascha = PaschaDates::around(target, CalendarSystem::Gregorian).unwrap();
        MovableFeasts::derive(target, &pascha)
    }

    #[test]
    fn test_2020_feast_dates() {
        let f = feasts(ymd(2020, 5, 1));
        assert_eq!(f.triodion_start_this_year, ymd(2020, 2, 9));
        assert_eq!(f.palm_sunday, ymd(2020, 4, 12));
        assert_eq!(f.pentecost, ymd(2020, 6, 7));
        assert_eq!(f.all_saints_this_year, ymd(2020, 6, 14));
        assert_eq!(f.thomas_sunday, ymd(2020, 4, 26));
        assert_eq!(f.lazarus_saturday_next, ymd(2021, 4, 24));
        assert_eq!(f.palm_sunday_next, ymd(2021, 4, 25));
    }

    #[test]
    fn test_clean_monday_reference_dates() {
        let expected = [
            ymd(2018, 2, 19),
            ymd(2019, 3, 11),
            ymd(2020, 3, 2),
            ymd(2021, 3, 15),
            ymd(2022, 3, 7),
            ymd(2023, 2, 27),
        ];
        for clean_monday in expected {
            let f = feasts(clean_monday);
            assert_eq!(f.great_lent_start, clean_monday);
            assert_eq!(f.great_lent_start.weekday(), Weekday::Mon);
        }
    }

    #[test]
    fn test_triodion_start_last_switches_on_start_day() {
        let before = feasts(ymd(2020, 2, 8));
        assert_eq!(before.triodion_start_last, ymd(2019, 2, 17));
        assert!(!before.is_triodion);

        let on = feasts(ymd(2020, 2, 9));
        assert_eq!(on.triodion_start_last, ymd(2020, 2, 9));
        assert!(on.is_triodion);
    }

    #[test]
    fn test_season_boundaries() {
        let eve = feasts(ymd(2020, 4, 18));
        assert!(eve.is_triodion);
        assert!(!eve.is_pentecostarion);

        let pascha = feasts(ymd(2020, 4, 19));
        assert!(!pascha.is_triodion);
        assert!(pascha.is_pentecostarion);
        assert!(pascha.is_pascha);

        let all_saints = feasts(ymd(2020, 6, 14));
        assert!(all_saints.is_pentecostarion);

        let after = feasts(ymd(2020, 6, 15));
        assert!(!after.is_pentecostarion);
        assert!(!after.is_triodion);
    }

    #[test]
    fn test_thomas_sunday_uses_last_pascha() {
        let f = feasts(ymd(2020, 3, 1));
        assert_eq!(f.thomas_sunday, ymd(2019, 5, 5));
    }
}
