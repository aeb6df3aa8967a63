use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("year {0} is outside the supported Gregorian range 1583..=9999")]
    UnsupportedYear(i32),
    #[error("unknown holiday category '{0}'")]
    UnknownCategory(String),
    #[error("invalid holiday rule '{name}': {reason}")]
    InvalidRule { name: String, reason: String },
    #[error("holiday '{name}' falls on {date}, outside of {year}")]
    OutOfYear { name: String, date: NaiveDate, year: i32 },
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error)
}

impl HolidayError {
    pub fn invalid_rule(name: &str, reason: impl Into<String>) -> HolidayError {
        HolidayError::InvalidRule { name: name.to_owned(), reason: reason.into() }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, HolidayError>
    where T: for<'a> Deserialize<'a> {
    Ok(serde_json::from_value(json_value)?)
}
