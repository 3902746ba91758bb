//! Pascha table use case

use crate::domain::day::MIN_YEAR;
use crate::domain::{compute_pascha, CalendarSystem, MovableFeasts, PaschaDates};
use crate::error::{Result, TypikonError};
use chrono::NaiveDate;
use tracing::info;

/// The main movable feasts of one year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaschaRow {
    pub year: i32,
    pub pascha: NaiveDate,
    pub triodion_start: NaiveDate,
    pub great_lent_start: NaiveDate,
    pub pentecost: NaiveDate,
    pub all_saints: NaiveDate,
}

/// Movable feasts for every year in `from..=to`.
pub fn pascha_table(from: i32, to: i32, calendar: CalendarSystem) -> Result<Vec<PaschaRow>> {
    if from < MIN_YEAR {
        return Err(TypikonError::InvalidYear(from));
    }
    if to < from {
        return Err(TypikonError::InvalidYear(to));
    }
    info!(from, to, calendar = %calendar, "building pascha table");

    (from..=to)
        .map(|year| -> Result<PaschaRow> {
            let pascha = compute_pascha(year, calendar)?;
            let feasts = MovableFeasts::derive(pascha, &PaschaDates::around(pascha, calendar)?);
            Ok(PaschaRow {
                year,
                pascha,
                triodion_start: feasts.triodion_start_this_year,
                great_lent_start: feasts.great_lent_start,
                pentecost: feasts.pentecost,
                all_saints: feasts.all_saints_this_year,
            })
        })
        .collect()
}
