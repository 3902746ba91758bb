//! Date reference parsing and resolution

use crate::domain::calendar::CalendarSystem;
use crate::domain::day::LiturgicalDay;
use crate::error::{Result, TypikonError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn ymd_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4,6})-(\d{1,2})-(\d{1,2})$").unwrap())
}

fn month_day_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{1,2})-(\d{1,2})$").unwrap())
}

/// A date as the user wrote it. Range checks happen on resolution, so
/// `2021-02-30` parses and later rolls over to March.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    /// Current day
    Today,
    /// Next occurrence of a month and day (today included)
    MonthDay { month: u32, day: u32 },
    /// Explicit year, month and day
    Ymd { year: i32, month: u32, day: u32 },
}

impl DateReference {
    /// Parse `today`, `MM-DD` or `YYYY-MM-DD`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || TypikonError::InvalidDateReference(input.to_string());

        if normalized == "today" || normalized == "now" {
            return Ok(DateReference::Today);
        }
        if let Some(caps) = ymd_regex().captures(&normalized) {
            return Ok(DateReference::Ymd {
                year: caps[1].parse().map_err(|_| invalid())?,
                month: caps[2].parse().map_err(|_| invalid())?,
                day: caps[3].parse().map_err(|_| invalid())?,
            });
        }
        if let Some(caps) = month_day_regex().captures(&normalized) {
            return Ok(DateReference::MonthDay {
                month: caps[1].parse().map_err(|_| invalid())?,
                day: caps[2].parse().map_err(|_| invalid())?,
            });
        }
        Err(invalid())
    }

    /// Build the liturgical day this reference points to, relative to `today`
    pub fn resolve(&self, calendar: CalendarSystem, today: NaiveDate) -> Result<LiturgicalDay> {
        use chrono::Datelike;

        match *self {
            DateReference::Today => {
                LiturgicalDay::from_ymd(today.year(), today.month(), today.day(), calendar)
            }
            DateReference::MonthDay { month, day } => {
                LiturgicalDay::from_month_day_relative_to(month, day, calendar, today)
            }
            DateReference::Ymd { year, month, day } => {
                LiturgicalDay::from_ymd(year, month, day, calendar)
            }
        }
    }
}
