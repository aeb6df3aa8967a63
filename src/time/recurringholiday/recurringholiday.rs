use chrono::{Datelike, NaiveDate};


/// A rule that places one holiday somewhere in every year.
pub trait RecurringHoliday: Send + Sync {

    /// The holiday's date in `year`, or `None` when the rule has no date that
    /// year (a Feb 29 rule in a common year, a year the rule cannot compute).
    fn get_holiday(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()) == Some(*d)
    }
}
