//! Liturgical day properties for a single date

use crate::domain::calendar::CalendarSystem;
use crate::domain::cycle::CycleIndices;
use crate::domain::date::{
    civil_date, ordinal_suffix, shift, weekday_abbrev, weekday_number,
};
use crate::domain::elevation::ElevationAnchors;
use crate::domain::movable::MovableFeasts;
use crate::domain::pascha::PaschaDates;
use crate::domain::report::ElevationReport;
use crate::domain::season::DayOfSeason;
use crate::error::{Result, TypikonError};
use chrono::{Datelike, Local, NaiveDate, Weekday};
use tracing::{debug, trace};

/// First year for which the Gregorian century correction is meaningful.
pub const MIN_YEAR: i32 = 1583;

/// Everything derived from one target date. Built as a whole and swapped in
/// as a whole, so readers never see fields from two different dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayProperties {
    pub date: NaiveDate,
    pub pascha: PaschaDates,
    pub feasts: MovableFeasts,
    pub elevation: ElevationAnchors,
    pub cycle: CycleIndices,
}

impl DayProperties {
    /// Run the derivation chain for `date`.
    pub fn derive(date: NaiveDate, calendar: CalendarSystem) -> Result<Self> {
        let pascha = PaschaDates::around(date, calendar)?;
        let feasts = MovableFeasts::derive(date, &pascha);
        let elevation = ElevationAnchors::derive(date)?;
        let cycle = CycleIndices::compute(date, &pascha, &feasts, &elevation)?;

        debug!(
            date = %date,
            calendar = %calendar,
            pascha = %pascha.this_year,
            triodion = feasts.is_triodion,
            pentecostarion = feasts.is_pentecostarion,
            "derived liturgical day"
        );
        trace!(?feasts, ?elevation, ?cycle, "derivation detail");

        Ok(DayProperties {
            date,
            pascha,
            feasts,
            elevation,
            cycle,
        })
    }
}

/// Liturgical day properties: a target date, its calendar system, and the
/// full set of values derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiturgicalDay {
    calendar: CalendarSystem,
    original_date: NaiveDate,
    props: DayProperties,
}

fn validate_ymd(year: i32, month: u32, day: u32) -> Result<()> {
    if year < MIN_YEAR {
        return Err(TypikonError::InvalidYear(year));
    }
    if !(1..=12).contains(&month) {
        return Err(TypikonError::InvalidMonth(month));
    }
    if !(1..=31).contains(&day) {
        return Err(TypikonError::InvalidDay(day));
    }
    Ok(())
}

impl LiturgicalDay {
    /// Create the properties for an explicit date.
    ///
    /// The day is only checked against 1..=31; a day past the end of the
    /// month rolls into the next one (February 30 becomes March 1 or 2).
    pub fn from_ymd(year: i32, month: u32, day: u32, calendar: CalendarSystem) -> Result<Self> {
        validate_ymd(year, month, day)?;
        let date = civil_date(year, month, day)?;
        Self::from_date(date, calendar)
    }

    /// Create the properties for the next occurrence of month/day.
    ///
    /// The comparison is by calendar date, not by instant: asking for
    /// today's own month/day yields today rather than the same day next
    /// year.
    pub fn from_month_day(month: u32, day: u32, calendar: CalendarSystem) -> Result<Self> {
        Self::from_month_day_relative_to(month, day, calendar, Local::now().date_naive())
    }

    /// Like [`LiturgicalDay::from_month_day`], relative to an explicit
    /// `today`. A date before `today` moves to the following year; `today`
    /// itself stays in the current year.
    pub fn from_month_day_relative_to(
        month: u32,
        day: u32,
        calendar: CalendarSystem,
        today: NaiveDate,
    ) -> Result<Self> {
        let year = today.year();
        validate_ymd(year, month, day)?;
        let mut date = civil_date(year, month, day)?;
        if date < today {
            date = civil_date(year + 1, month, day)?;
        }
        Self::from_date(date, calendar)
    }

    /// Create the properties for the current local date.
    pub fn today(calendar: CalendarSystem) -> Result<Self> {
        let now = Local::now().date_naive();
        Self::from_ymd(now.year(), now.month(), now.day(), calendar)
    }

    fn from_date(date: NaiveDate, calendar: CalendarSystem) -> Result<Self> {
        Ok(LiturgicalDay {
            calendar,
            original_date: date,
            props: DayProperties::derive(date, calendar)?,
        })
    }

    /// Move this instance to a new date. On error the instance is unchanged.
    pub fn set_date(&mut self, year: i32, month: u32, day: u32) -> Result<()> {
        validate_ymd(year, month, day)?;
        let date = civil_date(year, month, day)?;
        self.props = DayProperties::derive(date, self.calendar)?;
        Ok(())
    }

    /// Return to the date this instance was created with.
    pub fn reset_date(&mut self) -> Result<()> {
        self.props = DayProperties::derive(self.original_date, self.calendar)?;
        Ok(())
    }

    pub fn date(&self) -> NaiveDate {
        self.props.date
    }

    pub fn original_date(&self) -> NaiveDate {
        self.original_date
    }

    pub fn day_before(&self) -> NaiveDate {
        shift(self.props.date, -1)
    }

    pub fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    pub fn properties(&self) -> &DayProperties {
        &self.props
    }

    pub fn pascha(&self) -> &PaschaDates {
        &self.props.pascha
    }

    pub fn feasts(&self) -> &MovableFeasts {
        &self.props.feasts
    }

    pub fn elevation(&self) -> &ElevationAnchors {
        &self.props.elevation
    }

    pub fn cycle(&self) -> &CycleIndices {
        &self.props.cycle
    }

    // ── Season membership ────────────────────────────────────────────────

    pub fn is_triodion(&self) -> bool {
        self.props.feasts.is_triodion
    }

    pub fn is_pentecostarion(&self) -> bool {
        self.props.feasts.is_pentecostarion
    }

    pub fn is_pascha(&self) -> bool {
        self.props.feasts.is_pascha
    }

    // ── Weekday ──────────────────────────────────────────────────────────

    pub fn weekday(&self) -> Weekday {
        self.props.date.weekday()
    }

    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sun
    }

    pub fn is_monday(&self) -> bool {
        self.weekday() == Weekday::Mon
    }

    pub fn is_tuesday(&self) -> bool {
        self.weekday() == Weekday::Tue
    }

    pub fn is_wednesday(&self) -> bool {
        self.weekday() == Weekday::Wed
    }

    pub fn is_thursday(&self) -> bool {
        self.weekday() == Weekday::Thu
    }

    pub fn is_friday(&self) -> bool {
        self.weekday() == Weekday::Fri
    }

    pub fn is_saturday(&self) -> bool {
        self.weekday() == Weekday::Sat
    }

    /// "1" for Sunday through "7" for Saturday.
    pub fn nbr_day_of_week(&self) -> String {
        weekday_number(self.weekday()).to_string()
    }

    /// "Sun" through "Sat".
    pub fn day_of_week_abbrev(&self) -> &'static str {
        weekday_abbrev(self.weekday())
    }

    /// Two-digit month, "01" through "12".
    pub fn nbr_month(&self) -> String {
        format!("{:02}", self.props.date.month())
    }

    /// Two-digit day of month, "01" through "31".
    pub fn nbr_day_of_month(&self) -> String {
        format!("{:02}", self.props.date.day())
    }

    // ── Cycle indices ────────────────────────────────────────────────────

    /// Day of the active movable season, 0 outside the Triodion and
    /// Pentecostarion.
    pub fn day_of_season(&self) -> u8 {
        self.props
            .cycle
            .day_of_season
            .as_ref()
            .map_or(0, DayOfSeason::get)
    }

    pub fn eothinon_number(&self) -> u8 {
        self.props.cycle.eothinon_number
    }

    pub fn mode_of_week(&self) -> u8 {
        self.props.cycle.mode_of_week.get()
    }

    pub fn days_since_start_of_triodion(&self) -> u32 {
        self.props.cycle.days_since_start_of_triodion
    }

    pub fn days_since_start_last_lukan_cycle(&self) -> u32 {
        self.props.cycle.days_since_start_last_lukan_cycle
    }

    pub fn lukan_cycle_week(&self) -> u32 {
        self.props.cycle.lukan_cycle_week
    }

    /// E.g. "Mon of the 3rd week of Luke".
    pub fn lukan_cycle_description(&self) -> String {
        let week = self.lukan_cycle_week();
        format!(
            "{} of the {}{} week of Luke",
            self.day_of_week_abbrev(),
            week,
            ordinal_suffix(week)
        )
    }

    pub fn elevation_report(&self) -> ElevationReport {
        ElevationReport::from_day(self)
    }

    // ── Fixed feasts ─────────────────────────────────────────────────────

    /// Civil date of the Nativity of Christ in the target year: December 25
    /// on the Gregorian calendar, January 7 on the Julian.
    pub fn nativity_of_christ(&self) -> NaiveDate {
        let year = self.props.date.year();
        let (month, day) = match self.calendar {
            CalendarSystem::Gregorian => (12, 25),
            CalendarSystem::Julian => (1, 7),
        };
        // Both dates exist in every year the pascha dates could be built for.
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(self.props.date)
    }

    pub fn is_nativity_of_christ(&self) -> bool {
        self.props.date == self.nativity_of_christ()
    }
}
