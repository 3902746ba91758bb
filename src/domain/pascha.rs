//! Pascha computation (Gauss's Computus)

use crate::domain::calendar::CalendarSystem;
use crate::domain::date::civil_date;
use crate::error::Result;
use chrono::{Datelike, NaiveDate};

/// Compute the date of Pascha for `year`.
///
/// Gauss's formula gives the number of days after March 21. For the
/// Gregorian calendar the century correction moves the date onto the civil
/// calendar; that correction is only meaningful from 1583 onwards, which the
/// caller enforces.
pub fn compute_pascha(year: i32, calendar: CalendarSystem) -> Result<NaiveDate> {
    let r19 = year.rem_euclid(19);
    let r7 = year.rem_euclid(7);
    let r4 = year.rem_euclid(4);
    let n1 = (19 * r19 + 16) % 30;
    let n2 = (2 * r4 + 4 * r7 + 6 * n1) % 7;
    let mut n3 = n1 + n2;
    if calendar.applies_century_correction() {
        let century = year / 100;
        n3 += century - century / 4 - 2;
    }

    let (month, day) = if n3 > 40 {
        (5, n3 - 40)
    } else if n3 > 10 {
        (4, n3 - 10)
    } else {
        (3, n3 + 21)
    };
    civil_date(year, month, day as u32)
}

/// Pascha dates around a target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaschaDates {
    pub last_year: NaiveDate,
    pub this_year: NaiveDate,
    pub next_year: NaiveDate,
    /// Most recent Pascha on or before the target.
    pub last: NaiveDate,
    /// First Pascha strictly after the target.
    pub next: NaiveDate,
}

impl PaschaDates {
    /// Compute Pascha for the year before, of, and after `target`.
    pub fn around(target: NaiveDate, calendar: CalendarSystem) -> Result<Self> {
        let year = target.year();
        let last_year = compute_pascha(year - 1, calendar)?;
        let this_year = compute_pascha(year, calendar)?;
        let next_year = compute_pascha(year + 1, calendar)?;

        let last = if this_year <= target {
            this_year
        } else {
            last_year
        };
        let next = if this_year > target {
            this_year
        } else {
            next_year
        };

        Ok(PaschaDates {
            last_year,
            this_year,
            next_year,
            last,
            next,
        })
    }
}
