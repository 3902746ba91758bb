//! Bounded cycle positions: day of the movable season and Octoechos mode

use std::fmt;

/// Day of the active movable season (Triodion or Pentecostarion), 1..=70.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfSeason(u8);

impl DayOfSeason {
    pub const FIRST: DayOfSeason = DayOfSeason(1);
    pub const LAST: DayOfSeason = DayOfSeason(70);

    /// Returns `None` outside 1..=70.
    pub fn new(day: i64) -> Option<Self> {
        if (1..=70).contains(&day) {
            Some(DayOfSeason(day as u8))
        } else {
            None
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for DayOfSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{:02}", self.0)
    }
}

/// Octoechos mode (tone) of the week, 1..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mode(u8);

impl Mode {
    /// Modes for Pascha through Bright Saturday; the seventh day skips mode 7.
    const BRIGHT_WEEK: [u8; 7] = [1, 2, 3, 4, 5, 6, 8];

    /// Returns `None` outside 1..=8.
    pub fn new(mode: i64) -> Option<Self> {
        if (1..=8).contains(&mode) {
            Some(Mode(mode as u8))
        } else {
            None
        }
    }

    /// Mode for a number of whole weeks elapsed since the start of the cycle.
    pub fn from_weeks(weeks: i64) -> Self {
        Mode(weeks.rem_euclid(8) as u8 + 1)
    }

    /// Mode for the given day of Bright Week (1 = Pascha).
    pub fn bright_week(day: DayOfSeason) -> Option<Self> {
        Self::BRIGHT_WEEK
            .get(usize::from(day.get()) - 1)
            .map(|&mode| Mode(mode))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
