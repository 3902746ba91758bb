//! Error types for typikon

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for typikon
#[derive(Debug, Error)]
pub enum TypikonError {
    #[error("Invalid year: {0} (year cannot be less than 1583)")]
    InvalidYear(i32),

    #[error("Invalid month: {0} (month must be between 1 and 12)")]
    InvalidMonth(u32),

    #[error("Invalid day: {0} (day must be between 1 and 31)")]
    InvalidDay(u32),

    #[error("Invalid date reference: {0}")]
    InvalidDateReference(String),

    #[error("Date out of range: {year}-{month:02}-{day:02}")]
    DateOutOfRange { year: i32, month: u32, day: u32 },

    /// The Sunday after the Elevation of the Cross did not land on a Sunday.
    /// This is a defect in the date arithmetic, not bad input.
    #[error("Internal consistency failure: expected {date} to be a Sunday")]
    NotSunday { date: NaiveDate },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TypikonError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TypikonError::InvalidYear(_)
            | TypikonError::InvalidMonth(_)
            | TypikonError::InvalidDay(_)
            | TypikonError::InvalidDateReference(_)
            | TypikonError::DateOutOfRange { .. } => 3,
            TypikonError::ConfigNotFound(_) | TypikonError::Config(_) => 2,
            TypikonError::NotSunday { .. } => 70,
            _ => 1,
        }
    }

    /// Returns true for errors caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        self.exit_code() == 3
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TypikonError::InvalidDateReference(input) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today\n\
                    • MM-DD (next occurrence, e.g., 09-14)\n\
                    • YYYY-MM-DD (e.g., 2020-04-19)\n\n\
                    Examples:\n\
                    typikon show today\n\
                    typikon show 2020-04-19\n\
                    typikon topic oc --date 09-14",
                    input
                )
            }
            TypikonError::InvalidYear(_) => {
                format!(
                    "{}\n\n\
                    The Gregorian century correction is only meaningful from 1583 onwards.",
                    self
                )
            }
            TypikonError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path given to --config\n\
                    • Unset TYPIKON_CONFIG to fall back to ./typikon.toml\n\
                    • Run without a config file to use the defaults",
                    path.display()
                )
            }
            TypikonError::Config(msg) => {
                if msg.contains("calendar") {
                    format!(
                        "{}\n\n\
                        Valid calendars: julian, gregorian\n\
                        Example: calendar = \"gregorian\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TypikonError
pub type Result<T> = std::result::Result<T, TypikonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_reference_examples() {
        let err = TypikonError::InvalidDateReference("baddate".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("today"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("MM-DD"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_invalid_year_explains_cutoff() {
        let err = TypikonError::InvalidYear(1500);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("1500"));
        assert!(msg.contains("1583"));
    }

    #[test]
    fn test_config_calendar_suggestions() {
        let err = TypikonError::Config("Invalid calendar: 'coptic'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("julian, gregorian"));
    }

    #[test]
    fn test_validation_exit_codes() {
        assert_eq!(TypikonError::InvalidMonth(13).exit_code(), 3);
        assert_eq!(TypikonError::InvalidDay(0).exit_code(), 3);
        assert!(TypikonError::InvalidYear(1000).is_validation());
        assert!(!TypikonError::Config("x".into()).is_validation());
    }

    #[test]
    fn test_internal_failure_is_not_validation() {
        let date = NaiveDate::from_ymd_opt(2020, 9, 19).unwrap();
        let err = TypikonError::NotSunday { date };
        assert!(!err.is_validation());
        assert!(err.to_string().contains("2020-09-19"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TypikonError::Config("Bad value".to_string());
        assert_eq!(err.display_with_suggestions(), "Bad value");
    }
}
