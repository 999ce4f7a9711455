//! Event types and validation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalpadError, CalpadResult};

/// A calendar event.
///
/// `datetime` is always `date.and_time(time)`; it is carried in the
/// persisted form for ordering and range queries but is never an independent
/// source of truth. Events are immutable after creation: there is no edit or
/// delete operation, only the store's full-snapshot rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub datetime: NaiveDateTime,
}

impl Event {
    pub fn new(
        id: u64,
        title: String,
        date: NaiveDate,
        time: NaiveTime,
        description: String,
    ) -> Self {
        Event {
            id,
            title,
            date,
            time,
            description,
            datetime: date.and_time(time),
        }
    }
}

/// An unvalidated event candidate, fields as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Time of day, `HH:MM`
    pub time: String,
    /// May be empty
    pub description: String,
}

impl NewEvent {
    /// Check the required fields and parse the date/time strings.
    ///
    /// Parsing uses calendar fields only (`NaiveDate`/`NaiveTime`), so a
    /// date-only string can never shift by a day under a timezone offset.
    pub fn validate(&self) -> CalpadResult<(NaiveDate, NaiveTime)> {
        if self.title.trim().is_empty() {
            return Err(CalpadError::MissingField("title"));
        }
        if self.date.trim().is_empty() {
            return Err(CalpadError::MissingField("date"));
        }
        if self.time.trim().is_empty() {
            return Err(CalpadError::MissingField("time"));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| CalpadError::InvalidDate(self.date.clone()))?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| CalpadError::InvalidTime(self.time.clone()))?;

        Ok((date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewEvent {
        NewEvent {
            title: "Standup".to_string(),
            date: "2024-03-05".to_string(),
            time: "09:00".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_validate_parses_date_and_time() {
        let (date, time) = draft().validate().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut missing_title = draft();
        missing_title.title = "   ".to_string();
        assert!(matches!(
            missing_title.validate(),
            Err(CalpadError::MissingField("title"))
        ));

        let mut missing_date = draft();
        missing_date.date = String::new();
        assert!(matches!(
            missing_date.validate(),
            Err(CalpadError::MissingField("date"))
        ));

        let mut missing_time = draft();
        missing_time.time = String::new();
        assert!(matches!(
            missing_time.validate(),
            Err(CalpadError::MissingField("time"))
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_values() {
        let mut bad_date = draft();
        bad_date.date = "03/05/2024".to_string();
        assert!(matches!(
            bad_date.validate(),
            Err(CalpadError::InvalidDate(_))
        ));

        let mut bad_time = draft();
        bad_time.time = "9am".to_string();
        assert!(matches!(
            bad_time.validate(),
            Err(CalpadError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_datetime_is_derived_from_date_and_time() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let event = Event::new(1, "Standup".to_string(), date, time, String::new());
        assert_eq!(event.datetime, date.and_time(time));
    }
}
