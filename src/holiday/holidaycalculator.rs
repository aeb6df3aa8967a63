use std::sync::Arc;

use chrono::Datelike;
use log::debug;

use crate::time::recurringholiday::easterrelatedholiday::{
    check_supported_year,
    EasterRelatedHoliday,
    CORPUS_CHRISTI_SHIFT
};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use super::holiday::Holiday;
use super::holidaycategory::HolidayCategory;
use super::holidayerror::HolidayError;
use super::holidayset::HolidaySet;

/// A named, categorized rule.
#[derive(Clone)]
pub struct HolidayRule {
    name: String,
    category: HolidayCategory,
    rule: Arc<dyn RecurringHoliday>
}

impl HolidayRule {
    pub fn new(name: String, category: HolidayCategory, rule: Arc<dyn RecurringHoliday>) -> HolidayRule {
        HolidayRule { name, category, rule }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    pub fn rule(&self) -> &Arc<dyn RecurringHoliday> {
        &self.rule
    }
}

fn fixed(name: &str, category: HolidayCategory, month: u32, day: u32) -> Option<HolidayRule> {
    let rule = FixedDateHoliday::new(month, day)?;
    Some(HolidayRule::new(name.to_owned(), category, Arc::new(rule)))
}

fn easter_related(name: &str, shift_days: i32) -> Option<HolidayRule> {
    let rule = EasterRelatedHoliday::new(shift_days)?;
    Some(HolidayRule::new(name.to_owned(), HolidayCategory::ChurchHoliday, Arc::new(rule)))
}

#[derive(Clone)]
pub struct HolidayCalculator {
    rules: Vec<HolidayRule>
}

impl HolidayCalculator {
    pub fn new(rules: Vec<HolidayRule>) -> HolidayCalculator {
        HolidayCalculator { rules }
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Evaluates every rule for `year`. Rules without a date that year are
    /// skipped; a rule landing outside `year` is an error.
    pub fn compute(&self, year: i32) -> Result<HolidaySet, HolidayError> {
        check_supported_year(year)?;

        let mut holidays = Vec::with_capacity(self.rules.len());
        for holiday_rule in self.rules.iter() {
            let Some(date) = holiday_rule.rule.get_holiday(year) else {
                debug!("holiday '{}' has no date in {}", holiday_rule.name, year);
                continue;
            };
            if date.year() != year {
                return Err(HolidayError::OutOfYear {
                    name: holiday_rule.name.clone(),
                    date,
                    year
                });
            }
            holidays.push(Holiday::new(date, holiday_rule.name.clone(), holiday_rule.category));
        }

        debug!("computed {} holidays for {}", holidays.len(), year);
        Ok(HolidaySet::new(year, holidays))
    }
}

impl Default for HolidayCalculator {
    /// Polish public and church holidays.
    fn default() -> Self {
        use HolidayCategory::{ChurchHoliday, PublicHoliday};

        let rules = [
            fixed("Labour Day", PublicHoliday, 5, 1),
            fixed("May 3rd Constitution Day", PublicHoliday, 5, 3),
            fixed("Independence Day", PublicHoliday, 11, 11),
            fixed("New Year", ChurchHoliday, 1, 1),
            fixed("Feast of the Three Kings", ChurchHoliday, 1, 6),
            easter_related("Easter", 0),
            easter_related("Easter Monday", 1),
            easter_related("Corpus Christi", CORPUS_CHRISTI_SHIFT),
            fixed("Assumption of Mary", ChurchHoliday, 8, 15),
            fixed("All Saints' Day", ChurchHoliday, 11, 1),
            fixed("1st day of Christmas", ChurchHoliday, 12, 25),
            fixed("2nd day of Christmas", ChurchHoliday, 12, 26),
        ];

        // every built-in rule is a valid date or shift
        HolidayCalculator::new(rules.into_iter().flatten().collect())
    }
}

pub fn compute_holidays(year: i32) -> Result<HolidaySet, HolidayError> {
    HolidayCalculator::default().compute(year)
}
