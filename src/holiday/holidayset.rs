use chrono::NaiveDate;

use super::holiday::Holiday;
use super::holidaycategory::HolidayCategory;

/// All holidays of one year, in rule order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: i32,
    holidays: Vec<Holiday>
}

impl HolidaySet {
    pub(crate) fn new(year: i32, holidays: Vec<Holiday>) -> HolidaySet {
        HolidaySet { year, holidays }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }

    /// First holiday on `date`; later entries on the same date are shadowed.
    pub fn find(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date() == date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.find(date).is_some()
    }

    pub fn by_category(&self, category: HolidayCategory) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter().filter(move |h| h.category() == category)
    }

    pub fn public_holidays(&self) -> impl Iterator<Item = &Holiday> {
        self.by_category(HolidayCategory::PublicHoliday)
    }

    pub fn church_holidays(&self) -> impl Iterator<Item = &Holiday> {
        self.by_category(HolidayCategory::ChurchHoliday)
    }

    /// Chronological listing; holidays sharing a date keep their rule order.
    pub fn sorted_by_date(&self) -> Vec<&Holiday> {
        let mut sorted: Vec<&Holiday> = self.holidays.iter().collect();
        sorted.sort_by_key(|h| h.date());
        sorted
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
