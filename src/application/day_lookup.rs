//! Day lookup use case

use crate::domain::{CalendarSystem, DateReference, LiturgicalDay};
use crate::error::Result;
use chrono::{Local, NaiveDate};
use tracing::info;

/// Service for turning a date reference into liturgical day properties
pub struct DayLookupService {
    calendar: CalendarSystem,
}

impl DayLookupService {
    /// Create a new lookup service for the given calendar system
    pub fn new(calendar: CalendarSystem) -> Self {
        DayLookupService { calendar }
    }

    /// Resolve a date reference against the current local date
    pub fn execute(&self, date_ref: &str) -> Result<LiturgicalDay> {
        self.execute_relative_to(date_ref, Local::now().date_naive())
    }

    /// Resolve a date reference against an explicit `today`
    pub fn execute_relative_to(&self, date_ref: &str, today: NaiveDate) -> Result<LiturgicalDay> {
        let reference = DateReference::parse(date_ref)?;
        let day = reference.resolve(self.calendar, today)?;
        info!(
            reference = date_ref,
            date = %day.date(),
            calendar = %self.calendar,
            "resolved liturgical day"
        );
        Ok(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypikonError;

    #[test]
    fn test_execute_relative_to() {
        let service = DayLookupService::new(CalendarSystem::Gregorian);
        let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let day = service.execute_relative_to("04-19", today).unwrap();
        assert!(day.is_pascha());
        assert_eq!(day.calendar(), CalendarSystem::Gregorian);
    }

    #[test]
    fn test_execute_rejects_garbage() {
        let service = DayLookupService::new(CalendarSystem::Julian);
        let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(matches!(
            service.execute_relative_to("someday", today),
            Err(TypikonError::InvalidDateReference(_))
        ));
    }
}
