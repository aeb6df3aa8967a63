use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::holiday::holidaycalculator::HolidayCalculator;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayset::HolidaySet;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::days_of_year;
use super::dayview::DayView;
use super::selectionstate::{RejectReason, SelectionState, ToggleOutcome};

/// One planner page: the holidays of a single year and the days off picked
/// in it. Nothing outlives the session.
#[derive(Debug, Clone)]
pub struct PlannerSession {
    holidays: HolidaySet,
    state: SelectionState
}

impl PlannerSession {
    pub fn new(holidays: HolidaySet, capacity: usize) -> PlannerSession {
        PlannerSession { holidays, state: SelectionState::new(capacity) }
    }

    pub fn open(year: i32, capacity: usize, calculator: &HolidayCalculator) -> Result<PlannerSession, HolidayError> {
        let holidays = calculator.compute(year)?;
        Ok(PlannerSession::new(holidays, capacity))
    }

    pub fn year(&self) -> i32 {
        self.holidays.year()
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && self.state.is_selectable(date, &self.holidays)
    }

    pub fn toggle(&mut self, date: NaiveDate) -> ToggleOutcome {
        if date.year() != self.year() {
            debug!("rejected {}: outside {}", date, self.year());
            return ToggleOutcome::Rejected(RejectReason::OutsideYear { year: self.year() });
        }
        self.state.toggle(date, &self.holidays)
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn day_view(&self, date: NaiveDate) -> DayView {
        DayView::new(date, self.is_selectable(date), &self.state, &self.holidays)
    }

    pub fn year_view(&self) -> Vec<DayView> {
        let mut views = Vec::with_capacity(days_of_year(self.year()) as usize);
        if let Some(range) = RangeOfDates::year(self.year()) {
            views.extend(range.iter().map(|d| self.day_view(d)));
        }
        views
    }

    /// Reset and export controls only make sense with something selected.
    pub fn controls_enabled(&self) -> bool {
        !self.state.is_empty()
    }
}
