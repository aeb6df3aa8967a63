use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveTime;
use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::export::icalendar::{default_reminder, ICalendarExporter};
use crate::holiday::holidaycalculator::HolidayCalculator;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayruleloader::holiday_calculator_from_json_vec;
use crate::selection::selectionstate::DEFAULT_CAPACITY;
use crate::time::year::{YearRange, DEFAULT_YEAR_WINDOW};

const REMINDER_FORMAT: &str = "%H:%M";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error(transparent)]
    HolidayError(#[from] HolidayError),
    #[error("invalid reminder time '{0}', expected HH:MM")]
    InvalidReminder(String)
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_year_window() -> u32 {
    DEFAULT_YEAR_WINDOW
}

fn default_reminder_text() -> String {
    default_reminder().format(REMINDER_FORMAT).to_string()
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default = "default_capacity")]
    capacity: usize,
    #[serde(default = "default_year_window")]
    year_window: u32,
    #[serde(default = "default_reminder_text")]
    reminder: String,
    #[serde(default)]
    holidays: Option<Vec<serde_json::Value>>
}

/// Planner settings. Every field has a default; a `holidays` list in the
/// JSON replaces the built-in Polish rules entirely.
#[derive(Clone)]
pub struct Configuration {
    capacity: usize,
    year_window: u32,
    reminder: NaiveTime,
    holiday_calculator: HolidayCalculator
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            capacity: DEFAULT_CAPACITY,
            year_window: DEFAULT_YEAR_WINDOW,
            reminder: default_reminder(),
            holiday_calculator: HolidayCalculator::default()
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn year_window(&self) -> u32 {
        self.year_window
    }

    pub fn reminder(&self) -> NaiveTime {
        self.reminder
    }

    pub fn holiday_calculator(&self) -> &HolidayCalculator {
        &self.holiday_calculator
    }

    pub fn year_range(&self, current_year: i32) -> YearRange {
        YearRange::around(current_year, self.year_window)
    }

    pub fn icalendar_exporter(&self) -> ICalendarExporter {
        ICalendarExporter::new(self.reminder)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        let reminder = NaiveTime::parse_from_str(json_prop.reminder.trim(), REMINDER_FORMAT)
            .map_err(|_| ConfigurationError::InvalidReminder(json_prop.reminder.clone()))?;
        let holiday_calculator = match json_prop.holidays {
            Some(rules) => holiday_calculator_from_json_vec(&rules)?,
            None => HolidayCalculator::default()
        };
        Ok(Configuration {
            capacity: json_prop.capacity,
            year_window: json_prop.year_window,
            reminder,
            holiday_calculator
        })
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let json_value: serde_json::Value = serde_json::from_str(json)?;
        Configuration::from_json_value(json_value)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        let configuration = Configuration::from_json_value(json_value)?;
        info!(
            "loaded configuration from {}: capacity {}, {} holiday rules",
            file_path.as_ref().display(),
            configuration.capacity,
            configuration.holiday_calculator.rules().len()
        );
        Ok(configuration)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
