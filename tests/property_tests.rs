//! Property tests for the derivation chain

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use typikon::domain::{compute_pascha, sunday_after_elevation};
use typikon::{CalendarSystem, LiturgicalDay};

fn date_from_offset(days: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(1700, 1, 1).unwrap() + Duration::days(days)
}

fn day_at(date: NaiveDate, calendar: CalendarSystem) -> LiturgicalDay {
    LiturgicalDay::from_ymd(date.year(), date.month(), date.day(), calendar).unwrap()
}

fn calendar_strategy() -> impl Strategy<Value = CalendarSystem> {
    prop_oneof![Just(CalendarSystem::Gregorian), Just(CalendarSystem::Julian)]
}

proptest! {
    #[test]
    fn gregorian_pascha_is_a_spring_sunday(year in 1583i32..4000) {
        let pascha = compute_pascha(year, CalendarSystem::Gregorian).unwrap();
        prop_assert_eq!(pascha.weekday(), Weekday::Sun);
        prop_assert!((3..=5).contains(&pascha.month()), "{} outside March..May", pascha);
        prop_assert_eq!(pascha.year(), year);
    }

    #[test]
    fn sunday_after_elevation_is_a_sunday(year in 1583i32..4000) {
        let sunday = sunday_after_elevation(year).unwrap();
        prop_assert_eq!(sunday.weekday(), Weekday::Sun);
        prop_assert_eq!(sunday.month(), 9);
        prop_assert!((15..=21).contains(&sunday.day()));
    }

    #[test]
    fn seasons_never_overlap(days in 0i64..146_000, calendar in calendar_strategy()) {
        let date = date_from_offset(days);
        let day = day_at(date, calendar);
        prop_assert!(!(day.is_triodion() && day.is_pentecostarion()), "{} in both seasons", date);
    }

    #[test]
    fn indices_stay_in_range(days in 0i64..146_000, calendar in calendar_strategy()) {
        let date = date_from_offset(days);
        let day = day_at(date, calendar);

        prop_assert_eq!(day.date(), date);
        prop_assert!((1..=8).contains(&day.mode_of_week()));

        if day.is_sunday() {
            prop_assert!((1..=11).contains(&day.eothinon_number()));
        } else {
            prop_assert_eq!(day.eothinon_number(), 0);
        }

        let in_season = day.is_triodion() || day.is_pentecostarion();
        prop_assert_eq!(day.day_of_season() != 0, in_season);
        prop_assert!(day.day_of_season() <= 70);
    }

    #[test]
    fn pascha_brackets_target(days in 0i64..146_000, calendar in calendar_strategy()) {
        let date = date_from_offset(days);
        let day = day_at(date, calendar);
        let pascha = day.pascha();
        prop_assert!(pascha.last <= date, "last {} after {}", pascha.last, date);
        prop_assert!(date < pascha.next, "next {} not after {}", pascha.next, date);
    }

    #[test]
    fn gregorian_pascha_neighbours_are_sundays(days in 0i64..146_000) {
        let date = date_from_offset(days);
        let day = day_at(date, CalendarSystem::Gregorian);
        let pascha = day.pascha();
        prop_assert_eq!(pascha.last.weekday(), Weekday::Sun);
        prop_assert_eq!(pascha.next.weekday(), Weekday::Sun);
    }

    #[test]
    fn lukan_cycle_day_is_one_based(days in 0i64..146_000) {
        let date = date_from_offset(days);
        let day = day_at(date, CalendarSystem::Gregorian);
        prop_assert!(day.days_since_start_last_lukan_cycle() >= 1);
        prop_assert!(day.days_since_start_last_lukan_cycle() <= 372);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn whole_triodion_and_pentecostarion(year in 1600i32..2400) {
        let pascha = compute_pascha(year, CalendarSystem::Gregorian).unwrap();

        for offset in -70i64..0 {
            let day = day_at(pascha + Duration::days(offset), CalendarSystem::Gregorian);
            prop_assert!(day.is_triodion(), "{} not in triodion", day.date());
            prop_assert_eq!(i64::from(day.day_of_season()), offset + 71);
        }
        for offset in 0i64..=56 {
            let day = day_at(pascha + Duration::days(offset), CalendarSystem::Gregorian);
            prop_assert!(day.is_pentecostarion(), "{} not in pentecostarion", day.date());
            prop_assert_eq!(i64::from(day.day_of_season()), offset + 1);
        }

        let after = day_at(pascha + Duration::days(57), CalendarSystem::Gregorian);
        prop_assert!(!after.is_pentecostarion());
        let before = day_at(pascha + Duration::days(-71), CalendarSystem::Gregorian);
        prop_assert!(!before.is_triodion());
    }

    #[test]
    fn bright_week_modes(year in 1600i32..2400) {
        let pascha = compute_pascha(year, CalendarSystem::Gregorian).unwrap();
        let modes: Vec<u8> = (0..7)
            .map(|offset| day_at(pascha + Duration::days(offset), CalendarSystem::Gregorian).mode_of_week())
            .collect();
        prop_assert_eq!(modes, vec![1, 2, 3, 4, 5, 6, 8]);
    }
}
