use chrono::NaiveDate;
use serde::Serialize;

use crate::holiday::holidayset::HolidaySet;
use super::displaycategory::{classify, DisplayCategory};
use super::selectionstate::SelectionState;

const DISABLED_ALL_DAYS: &str = "disabled-all-days";

/// What the calendar widget needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    date: NaiveDate,
    selectable: bool,
    selected: bool,
    capacity_reached: bool,
    category: DisplayCategory,
    tooltip: String
}

impl DayView {
    /// `selectable` comes from the caller so that a session can apply its own
    /// rules (such as the year bound) on top of the selection state.
    pub fn new(date: NaiveDate, selectable: bool, state: &SelectionState, holidays: &HolidaySet) -> DayView {
        let tooltip = holidays
            .find(date)
            .map(|holiday| holiday.tooltip())
            .unwrap_or_default();

        DayView {
            date,
            selectable,
            selected: state.contains(date),
            capacity_reached: state.is_full(),
            category: classify(date, holidays),
            tooltip
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn selectable(&self) -> bool {
        self.selectable
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn category(&self) -> DisplayCategory {
        self.category
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Category class, plus `disabled-all-days` on every cell once the
    /// selection is full.
    pub fn css_classes(&self) -> String {
        if self.capacity_reached {
            format!("{} {}", self.category.css_class(), DISABLED_ALL_DAYS)
        } else {
            self.category.css_class().to_owned()
        }
    }
}
