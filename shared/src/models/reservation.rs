//! Reservation Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default party size pre-selected on the form
pub const DEFAULT_GUEST_COUNT: &str = "2";

/// Quick-select time chips ("Popular times")
pub const POPULAR_TIMES: [&str; 4] = ["6:00 PM", "6:30 PM", "7:00 PM", "8:00 PM"];

/// Guest count options offered by the party-size picker
pub const GUEST_OPTIONS: [&str; 5] = ["1", "2", "3", "4", "+5"];

/// Reservation form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationField {
    Name,
    Phone,
    Date,
    Time,
    GuestCount,
}

impl ReservationField {
    pub const ALL: [ReservationField; 5] = [
        ReservationField::Name,
        ReservationField::Phone,
        ReservationField::Date,
        ReservationField::Time,
        ReservationField::GuestCount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationField::Name => "name",
            ReservationField::Phone => "phone",
            ReservationField::Date => "date",
            ReservationField::Time => "time",
            ReservationField::GuestCount => "guest_count",
        }
    }
}

impl fmt::Display for ReservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ReservationField::Name),
            "phone" => Ok(ReservationField::Phone),
            "date" => Ok(ReservationField::Date),
            "time" => Ok(ReservationField::Time),
            "guests" | "guest_count" | "guestcount" => Ok(ReservationField::GuestCount),
            other => Err(format!("unknown reservation field: {}", other)),
        }
    }
}

/// Draft reservation being composed on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guest_count: String,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            date: String::new(),
            time: String::new(),
            guest_count: DEFAULT_GUEST_COUNT.to_string(),
        }
    }
}

impl ReservationDraft {
    pub fn get(&self, field: ReservationField) -> &str {
        match field {
            ReservationField::Name => &self.name,
            ReservationField::Phone => &self.phone,
            ReservationField::Date => &self.date,
            ReservationField::Time => &self.time,
            ReservationField::GuestCount => &self.guest_count,
        }
    }

    /// Overwrite one field, no validation
    pub fn set(&mut self, field: ReservationField, value: impl Into<String>) {
        let slot = match field {
            ReservationField::Name => &mut self.name,
            ReservationField::Phone => &mut self.phone,
            ReservationField::Date => &mut self.date,
            ReservationField::Time => &mut self.time,
            ReservationField::GuestCount => &mut self.guest_count,
        };
        *slot = value.into();
    }

    /// Fields that are empty
    pub fn missing_fields(&self) -> Vec<ReservationField> {
        ReservationField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Reservation display status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Idle,
    Confirmed,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Idle => write!(f, "IDLE"),
            ReservationStatus::Confirmed => write!(f, "CONFIRMED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = ReservationDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.date, "");
        assert_eq!(draft.time, "");
        assert_eq!(draft.guest_count, "2");
        assert!(draft.is_default());
    }

    #[test]
    fn test_draft_missing_fields() {
        let mut draft = ReservationDraft::default();
        assert_eq!(
            draft.missing_fields(),
            vec![
                ReservationField::Name,
                ReservationField::Phone,
                ReservationField::Date,
                ReservationField::Time,
            ]
        );

        draft.set(ReservationField::Name, "Ada");
        draft.set(ReservationField::Date, "2026-10-24");
        draft.set(ReservationField::Time, POPULAR_TIMES[2]);
        assert_eq!(draft.missing_fields(), vec![ReservationField::Phone]);

        // whitespace is a value, like a required form input
        draft.set(ReservationField::Phone, "   ");
        assert!(draft.is_complete());

        draft.set(ReservationField::Phone, "+234 123 456 789");
        assert!(draft.is_complete());

        draft.set(ReservationField::GuestCount, "");
        assert_eq!(draft.missing_fields(), vec![ReservationField::GuestCount]);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("Name".parse::<ReservationField>(), Ok(ReservationField::Name));
        assert_eq!("guests".parse::<ReservationField>(), Ok(ReservationField::GuestCount));
        assert!("email".parse::<ReservationField>().is_err());
    }
}
