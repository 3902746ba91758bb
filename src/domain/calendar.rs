//! Calendar system selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar system used to compute Pascha.
///
/// The Julian variant returns the Julian-calendar date of Pascha expressed
/// as the same month and day on the civil calendar; the Gregorian variant
/// applies the century correction and yields the civil date on which
/// Orthodox Pascha is celebrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    Julian,
    #[default]
    Gregorian,
}

impl CalendarSystem {
    /// Whether the Gregorian century correction applies.
    pub fn applies_century_correction(&self) -> bool {
        matches!(self, CalendarSystem::Gregorian)
    }
}

impl FromStr for CalendarSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "julian" => Ok(CalendarSystem::Julian),
            "gregorian" => Ok(CalendarSystem::Gregorian),
            _ => Err(format!(
                "Invalid calendar: '{}'. Valid calendars are: julian, gregorian",
                s
            )),
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarSystem::Julian => write!(f, "julian"),
            CalendarSystem::Gregorian => write!(f, "gregorian"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            "Julian".parse::<CalendarSystem>().unwrap(),
            CalendarSystem::Julian
        );
        assert_eq!(
            "GREGORIAN".parse::<CalendarSystem>().unwrap(),
            CalendarSystem::Gregorian
        );
    }

    #[test]
    fn test_parse_invalid() {
        let err = "coptic".parse::<CalendarSystem>().unwrap_err();
        assert!(err.contains("julian, gregorian"));
    }

    #[test]
    fn test_default_is_gregorian() {
        assert_eq!(CalendarSystem::default(), CalendarSystem::Gregorian);
        assert!(CalendarSystem::default().applies_century_correction());
        assert!(!CalendarSystem::Julian.applies_century_correction());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for cal in [CalendarSystem::Julian, CalendarSystem::Gregorian] {
            assert_eq!(cal.to_string().parse::<CalendarSystem>().unwrap(), cal);
        }
    }
}
