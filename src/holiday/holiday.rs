use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::holidaycategory::HolidayCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    date: NaiveDate,
    name: String,
    category: HolidayCategory
}

impl Holiday {
    pub fn new(date: NaiveDate, name: String, category: HolidayCategory) -> Holiday {
        Holiday { date, name, category }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    /// `"Independence Day (Public Holiday)"`
    pub fn tooltip(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}
