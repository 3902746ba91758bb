//! Cycle positions derived from the feast dates
//!
//! Thomas Sunday opens the eight-tone cycle with mode 1. The Sunday of All
//! Saints opens the eleven-week Eothinon cycle with Eothinon 1. The Lukan
//! cycle counts days from the Monday after the Sunday after the Elevation.

use crate::domain::date::{civil_date, days_between, weeks_between};
use crate::domain::elevation::ElevationAnchors;
use crate::domain::movable::{MovableFeasts, TRIODION_LENGTH_DAYS};
use crate::domain::pascha::PaschaDates;
use crate::domain::season::{DayOfSeason, Mode};
use crate::error::Result;
use chrono::{Datelike, NaiveDate, Weekday};

const EOTHINON_CYCLE_WEEKS: i64 = 11;

/// Integer cycle positions for a target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleIndices {
    /// Day of the active Triodion or Pentecostarion; `None` outside both.
    pub day_of_season: Option<DayOfSeason>,
    /// 1-based day count from the most recent Triodion start; keeps counting
    /// through the Pentecostarion (Pascha is day 71).
    pub days_since_start_of_triodion: u32,
    /// 1..=11 on Sundays, 0 otherwise.
    pub eothinon_number: u8,
    pub mode_of_week: Mode,
    /// 0-based.
    pub days_since_sunday_after_last_elevation: u32,
    /// 1-based.
    pub days_since_start_last_lukan_cycle: u32,
    pub lukan_cycle_week: u32,
    pub days_until_start_of_triodion: u32,
    pub number_of_sundays_before_start_of_triodion: u32,
    /// 1..=7 during Great Lent and Holy Week by Triodion day, 0 otherwise.
    pub week_of_lent: u8,
    /// Movable-cycle day with Pascha as day 1 (Holy Saturday is 0), while the
    /// Triodion count lies between 70 and 127.
    pub pentecostarion_movable_day: Option<u32>,
}

impl CycleIndices {
    pub fn compute(
        target: NaiveDate,
        pascha: &PaschaDates,
        feasts: &MovableFeasts,
        elevation: &ElevationAnchors,
    ) -> Result<Self> {
        let day_of_season = day_of_season(target, pascha, feasts);
        let days_since_start_of_triodion =
            (days_between(feasts.triodion_start_last, target) + 1) as u32;
        let days_since_start_last_lukan_cycle =
            (days_between(elevation.lukan_cycle_start_last, target) + 1) as u32;
        let days_until_start_of_triodion = days_until_start_of_triodion(feasts)?;

        Ok(CycleIndices {
            day_of_season,
            days_since_start_of_triodion,
            eothinon_number: eothinon_number(target, feasts),
            mode_of_week: mode_of_week(target, feasts, day_of_season),
            days_since_sunday_after_last_elevation: days_between(
                elevation.sunday_after_elevation_last,
                target,
            ) as u32,
            days_since_start_last_lukan_cycle,
            lukan_cycle_week: lukan_cycle_week(days_since_start_last_lukan_cycle),
            days_until_start_of_triodion,
            number_of_sundays_before_start_of_triodion: days_until_start_of_triodion / 7,
            week_of_lent: week_of_lent(days_since_start_of_triodion),
            pentecostarion_movable_day: pentecostarion_movable_day(days_since_start_of_triodion),
        })
    }
}

fn day_of_season(
    target: NaiveDate,
    pascha: &PaschaDates,
    feasts: &MovableFeasts,
) -> Option<DayOfSeason> {
    let season_start = if feasts.is_triodion {
        feasts.triodion_start_this_year
    } else if feasts.is_pentecostarion {
        pascha.this_year
    } else {
        return None;
    };
    DayOfSeason::new(days_between(season_start, target) + 1)
}

fn eothinon_number(target: NaiveDate, feasts: &MovableFeasts) -> u8 {
    if target.weekday() != Weekday::Sun {
        return 0;
    }
    if feasts.is_pascha {
        return 1;
    }
    let anchor = if target < feasts.all_saints_this_year {
        feasts.all_saints_last_year
    } else {
        feasts.all_saints_this_year
    };
    (weeks_between(anchor, target).rem_euclid(EOTHINON_CYCLE_WEEKS) + 1) as u8
}

fn mode_of_week(
    target: NaiveDate,
    feasts: &MovableFeasts,
    day_of_season: Option<DayOfSeason>,
) -> Mode {
    if feasts.is_pentecostarion {
        if let Some(mode) = day_of_season.and_then(Mode::bright_week) {
            return mode;
        }
    }
    Mode::from_weeks(weeks_between(feasts.thomas_sunday, target))
}

fn lukan_cycle_week(days_since_start: u32) -> u32 {
    if days_since_start < 8 {
        1
    } else {
        days_since_start / 7 + 1
    }
}

fn days_until_start_of_triodion(feasts: &MovableFeasts) -> Result<u32> {
    let start = feasts.triodion_start_this_year;
    let jan15 = civil_date(start.year(), 1, 15)?;
    Ok(days_between(jan15, start).max(0) as u32)
}

fn week_of_lent(days_since_start_of_triodion: u32) -> u8 {
    match days_since_start_of_triodion {
        23..=29 => 1,
        30..=36 => 2,
        37..=43 => 3,
        44..=50 => 4,
        51..=57 => 5,
        58..=64 => 6,
        65..=70 => 7,
        _ => 0,
    }
}

fn pentecostarion_movable_day(days_since_start_of_triodion: u32) -> Option<u32> {
    let days = i64::from(days_since_start_of_triodion);
    if days > TRIODION_LENGTH_DAYS - 1 && days < 128 {
        Some((days - TRIODION_LENGTH_DAYS) as u32)
    } else {
        None
    }
}
