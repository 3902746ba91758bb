//! Lukan cycle report for a liturgical day

use crate::domain::date::{format_mdy, ordinal_suffix};
use crate::domain::day::LiturgicalDay;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Where a date sits relative to the Elevation of the Cross and the Lukan
/// cycle. Used to check the anchors against published lectionary tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElevationReport {
    pub liturgical_date: NaiveDate,
    pub elevation: NaiveDate,
    pub sunday_after: NaiveDate,
    pub lukan_cycle_start: NaiveDate,
    pub elapsed_days: u32,
    pub lukan_cycle_day: u32,
    pub lukan_cycle_day_name: &'static str,
    pub lukan_cycle_week: u32,
}

impl ElevationReport {
    pub fn from_day(day: &LiturgicalDay) -> Self {
        let elevation = day.elevation();
        let cycle = day.cycle();
        ElevationReport {
            liturgical_date: day.date(),
            elevation: elevation.elevation_of_cross_last,
            sunday_after: elevation.sunday_after_elevation_last,
            lukan_cycle_start: elevation.lukan_cycle_start_last,
            elapsed_days: cycle.days_since_sunday_after_last_elevation,
            lukan_cycle_day: cycle.days_since_start_last_lukan_cycle,
            lukan_cycle_day_name: day.day_of_week_abbrev(),
            lukan_cycle_week: cycle.lukan_cycle_week,
        }
    }
}

impl fmt::Display for ElevationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Liturgical date: {} Elevation: {} Sunday After: {} Elapsed days: {} \
             Lukan Cycle start: {} Lukan Cycle day: {} {} of the {}{} week of Luke",
            format_mdy(self.liturgical_date),
            format_mdy(self.elevation),
            format_mdy(self.sunday_after),
            self.elapsed_days,
            format_mdy(self.lukan_cycle_start),
            self.lukan_cycle_day,
            self.lukan_cycle_day_name,
            self.lukan_cycle_week,
            ordinal_suffix(self.lukan_cycle_week)
        )
    }
}
