use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::holiday::holidaycategory::HolidayCategory;
use crate::holiday::holidayset::HolidaySet;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum DisplayCategory {
    PublicHoliday,
    ChurchHoliday,
    Weekend,
    Workday
}

impl DisplayCategory {
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayCategory::PublicHoliday => "public-holiday",
            DisplayCategory::ChurchHoliday => "church-holiday",
            DisplayCategory::Weekend => "weekend",
            DisplayCategory::Workday => "working-day"
        }
    }

    pub fn is_holiday(&self) -> bool {
        matches!(self, DisplayCategory::PublicHoliday | DisplayCategory::ChurchHoliday)
    }
}

impl From<HolidayCategory> for DisplayCategory {
    fn from(category: HolidayCategory) -> DisplayCategory {
        match category {
            HolidayCategory::PublicHoliday => DisplayCategory::PublicHoliday,
            HolidayCategory::ChurchHoliday => DisplayCategory::ChurchHoliday
        }
    }
}

#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    // Sunday-start week: 0 = Sunday, 6 = Saturday
    matches!(date.weekday().num_days_from_sunday(), 0 | 6)
}

/// Holiday membership first, then the weekday.
pub fn classify(date: NaiveDate, holidays: &HolidaySet) -> DisplayCategory {
    match holidays.find(date) {
        Some(holiday) => holiday.category().into(),
        None if is_weekend(date) => DisplayCategory::Weekend,
        None => DisplayCategory::Workday
    }
}
