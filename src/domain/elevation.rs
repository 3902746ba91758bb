//! Elevation of the Cross anchors and the start of the Lukan cycle
//!
//! The Gospel of Luke is read from the Monday after the first Sunday after
//! the Elevation of the Cross (September 14). These anchors are independent
//! of Pascha.

use crate::domain::date::{civil_date, shift};
use crate::error::{Result, TypikonError};
use chrono::{Datelike, NaiveDate, Weekday};

pub const ELEVATION_MONTH: u32 = 9;
pub const ELEVATION_DAY: u32 = 14;

/// Days from September 14 to the Sunday after it. A Sunday feast still
/// advances a full week.
fn days_to_following_sunday(weekday: Weekday) -> u32 {
    match weekday {
        Weekday::Sun => 7,
        Weekday::Mon => 6,
        Weekday::Tue => 5,
        Weekday::Wed => 4,
        Weekday::Thu => 3,
        Weekday::Fri => 2,
        Weekday::Sat => 1,
    }
}

/// The Elevation of the Cross in `year`.
pub fn elevation_of_cross(year: i32) -> Result<NaiveDate> {
    civil_date(year, ELEVATION_MONTH, ELEVATION_DAY)
}

/// The first Sunday after the Elevation of the Cross in `year`.
pub fn sunday_after_elevation(year: i32) -> Result<NaiveDate> {
    let elevation = elevation_of_cross(year)?;
    let offset = days_to_following_sunday(elevation.weekday());
    ensure_sunday(civil_date(year, ELEVATION_MONTH, ELEVATION_DAY + offset)?)
}

/// The Monday that opens the Lukan cycle in `year`.
pub fn lukan_cycle_start(year: i32) -> Result<NaiveDate> {
    Ok(shift(sunday_after_elevation(year)?, 1))
}

/// Fails with [`TypikonError::NotSunday`] unless `date` is a Sunday.
pub(crate) fn ensure_sunday(date: NaiveDate) -> Result<NaiveDate> {
    if date.weekday() == Weekday::Sun {
        Ok(date)
    } else {
        Err(TypikonError::NotSunday { date })
    }
}

/// Elevation anchors as seen from a target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevationAnchors {
    pub elevation_of_cross_this_year: NaiveDate,
    /// September 14 of the year of `sunday_after_elevation_last`.
    pub elevation_of_cross_last: NaiveDate,
    /// Most recent Sunday after the Elevation on or before the target.
    pub sunday_after_elevation_last: NaiveDate,
    /// Most recent Lukan cycle start on or before the target.
    pub lukan_cycle_start_last: NaiveDate,
}

impl ElevationAnchors {
    pub fn derive(target: NaiveDate) -> Result<Self> {
        let year = target.year();
        let sunday_this_year = sunday_after_elevation(year)?;
        let sunday_last_year = sunday_after_elevation(year - 1)?;

        let sunday_after_elevation_last = if target < sunday_this_year {
            sunday_last_year
        } else {
            sunday_this_year
        };
        let lukan_this_year = shift(sunday_this_year, 1);
        let lukan_cycle_start_last = if target < lukan_this_year {
            shift(sunday_last_year, 1)
        } else {
            lukan_this_year
        };

        Ok(ElevationAnchors {
            elevation_of_cross_this_year: elevation_of_cross(year)?,
            elevation_of_cross_last: elevation_of_cross(sunday_after_elevation_last.year())?,
            sunday_after_elevation_last,
            lukan_cycle_start_last,
        })
    }
}
