use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};

use crate::holiday::holidayerror::HolidayError;
use super::recurringholiday::RecurringHoliday;

/// Years for which the Gregorian Easter computation is defined.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1583..=9999;

/// Shifts for which an Easter-derived date stays inside Easter's own year.
/// Easter falls between March 22 (day 81, or 82 in a leap year) and
/// April 25 (day 115, or 116).
pub const SHIFT_DAYS_RANGE: RangeInclusive<i32> = -80..=250;

pub const CORPUS_CHRISTI_SHIFT: i32 = 60;

pub fn check_supported_year(year: i32) -> Result<(), HolidayError> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(HolidayError::UnsupportedYear(year))
    }
}

/// Gregorian Easter Sunday (Meeus/Jones/Butcher).
pub fn compute_easter(year: i32) -> Result<NaiveDate, HolidayError> {
    check_supported_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or(HolidayError::UnsupportedYear(year))
}

pub fn compute_corpus_christi(year: i32) -> Result<NaiveDate, HolidayError> {
    let easter = compute_easter(year)?;
    easter
        .checked_add_days(Days::new(CORPUS_CHRISTI_SHIFT as u64))
        .ok_or(HolidayError::UnsupportedYear(year))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EasterRelatedHoliday {
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i32) -> Option<EasterRelatedHoliday> {
        if SHIFT_DAYS_RANGE.contains(&shift_days) {
            Some(EasterRelatedHoliday { shift_days })
        } else {
            None
        }
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        let easter = compute_easter(year).ok()?;
        let shift = Days::new(self.shift_days.unsigned_abs() as u64);
        if self.shift_days >= 0 {
            easter.checked_add_days(shift)
        } else {
            easter.checked_sub_days(shift)
        }
    }
}
