use chrono::NaiveDate;

use super::super::utility::max_days_of_month;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        if !(1..=12).contains(&month) || day == 0 || day > max_days_of_month(month) {
            None
        } else {
            Some(FixedDateHoliday { month, day })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_dates() {
        assert!(FixedDateHoliday::new(0, 1).is_none());
        assert!(FixedDateHoliday::new(13, 1).is_none());
        assert!(FixedDateHoliday::new(4, 31).is_none());
        assert!(FixedDateHoliday::new(5, 0).is_none());
    }

    #[test]
    fn same_date_every_year() {
        let independence_day = FixedDateHoliday::new(11, 11).unwrap();
        for year in [1999, 2024, 2100] {
            assert_eq!(
                independence_day.get_holiday(year),
                NaiveDate::from_ymd_opt(year, 11, 11)
            );
        }
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert!(leap_day.get_holiday(2024).is_some());
        assert!(leap_day.get_holiday(2023).is_none());
    }

    #[test]
    fn is_holiday_matches_date() {
        let new_year = FixedDateHoliday::new(1, 1).unwrap();
        assert!(new_year.is_holiday(&NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(!new_year.is_holiday(&NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()));
    }
}
