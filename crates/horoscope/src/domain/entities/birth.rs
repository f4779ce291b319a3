//! BirthInput - Validated client input

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::Gender;

/// Rejection reasons for a birth date, worded for API clients
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthDateError {
    #[error("dateOfBirth is required (YYYY-MM-DD)")]
    Missing,

    #[error("dateOfBirth invalid")]
    Invalid,
}

/// Birth date plus optional gender hint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub gender: Option<Gender>,
}

impl BirthInput {
    pub fn new(date: NaiveDate, gender: Option<Gender>) -> Self {
        Self { date, gender }
    }

    /// Validate raw request fields
    pub fn parse(date_of_birth: Option<&str>, gender: Option<&str>) -> Result<Self, BirthDateError> {
        // Only an absent or empty string is missing; blanks are an invalid date
        let raw = date_of_birth
            .filter(|s| !s.is_empty())
            .ok_or(BirthDateError::Missing)?;

        let date = parse_birth_date(raw.trim()).ok_or(BirthDateError::Invalid)?;

        Ok(Self::new(date, Gender::from_param(gender)))
    }
}

/// Parse the calendar date formats accepted from clients.
///
/// Timestamps carrying an offset are converted to UTC before the date is taken.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc().date());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
