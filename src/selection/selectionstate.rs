use std::fmt;

use chrono::NaiveDate;
use log::debug;

use crate::holiday::holidayset::HolidaySet;

pub const DEFAULT_CAPACITY: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Holiday,
    CapacityReached { capacity: usize },
    OutsideYear { year: i32 }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Holiday => {
                write!(f, "You cannot select this date because it is a holiday.")
            },
            RejectReason::CapacityReached { capacity } => {
                write!(f, "You cannot select more than {} days off.", capacity)
            },
            RejectReason::OutsideYear { year } => {
                write!(f, "You can only select days off in {}.", year)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    Rejected(RejectReason)
}

impl ToggleOutcome {
    pub fn accepted(&self) -> bool {
        !matches!(self, ToggleOutcome::Rejected(_))
    }
}

/// Days off picked for one year.
///
/// `selected` never exceeds `capacity` and never holds a holiday of the
/// `HolidaySet` passed to [`SelectionState::toggle`]. Insertion order is kept
/// for display only; equality compares membership.
#[derive(Debug, Clone)]
pub struct SelectionState {
    capacity: usize,
    selected: Vec<NaiveDate>
}

impl SelectionState {
    pub fn new(capacity: usize) -> SelectionState {
        SelectionState { capacity, selected: Vec::new() }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Selected dates in the order they were picked.
    pub fn selected(&self) -> &[NaiveDate] {
        &self.selected
    }

    pub fn sorted(&self) -> Vec<NaiveDate> {
        let mut sorted = self.selected.clone();
        sorted.sort();
        sorted
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.selected.len())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.selected.contains(&date)
    }

    /// Holidays never are; otherwise a date is selectable while there is room
    /// left, and a selected date always stays selectable so it can be removed.
    pub fn is_selectable(&self, date: NaiveDate, holidays: &HolidaySet) -> bool {
        !holidays.contains(date) && (self.contains(date) || !self.is_full())
    }

    pub fn toggle(&mut self, date: NaiveDate, holidays: &HolidaySet) -> ToggleOutcome {
        if holidays.contains(date) {
            debug!("rejected {}: holiday", date);
            return ToggleOutcome::Rejected(RejectReason::Holiday);
        }

        if let Some(index) = self.selected.iter().position(|d| *d == date) {
            self.selected.remove(index);
            ToggleOutcome::Removed
        } else if !self.is_full() {
            self.selected.push(date);
            ToggleOutcome::Added
        } else {
            debug!("rejected {}: capacity of {} reached", date, self.capacity);
            ToggleOutcome::Rejected(RejectReason::CapacityReached { capacity: self.capacity })
        }
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState::new(DEFAULT_CAPACITY)
    }
}

impl PartialEq for SelectionState {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity
            && self.selected.len() == other.selected.len()
            && self.selected.iter().all(|d| other.contains(*d))
    }
}

impl Eq for SelectionState {}
