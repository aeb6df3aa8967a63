use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use daysoff::holiday::holidaycalculator::compute_holidays;
use daysoff::holiday::holidaycategory::HolidayCategory;
use daysoff::time::recurringholiday::easterrelatedholiday::{compute_corpus_christi, compute_easter};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_easter_reference_years() {
    let expected = [
        (2000, date(2000, 4, 23)),
        (2019, date(2019, 4, 21)),
        (2023, date(2023, 4, 9)),
        (2024, date(2024, 3, 31)),
        (2025, date(2025, 4, 20)),
        (2026, date(2026, 4, 5)),
        (2100, date(2100, 3, 28)),
    ];
    for (year, easter) in expected {
        assert_eq!(compute_easter(year).unwrap(), easter, "{year}");
    }
}

#[test]
fn test_holidays_2025_full_list() {
    let set = compute_holidays(2025).unwrap();
    let expected = [
        (date(2025, 1, 1), "New Year", HolidayCategory::ChurchHoliday),
        (date(2025, 1, 6), "Feast of the Three Kings", HolidayCategory::ChurchHoliday),
        (date(2025, 4, 20), "Easter", HolidayCategory::ChurchHoliday),
        (date(2025, 4, 21), "Easter Monday", HolidayCategory::ChurchHoliday),
        (date(2025, 5, 1), "Labour Day", HolidayCategory::PublicHoliday),
        (date(2025, 5, 3), "May 3rd Constitution Day", HolidayCategory::PublicHoliday),
        (date(2025, 6, 19), "Corpus Christi", HolidayCategory::ChurchHoliday),
        (date(2025, 8, 15), "Assumption of Mary", HolidayCategory::ChurchHoliday),
        (date(2025, 11, 1), "All Saints' Day", HolidayCategory::ChurchHoliday),
        (date(2025, 11, 11), "Independence Day", HolidayCategory::PublicHoliday),
        (date(2025, 12, 25), "1st day of Christmas", HolidayCategory::ChurchHoliday),
        (date(2025, 12, 26), "2nd day of Christmas", HolidayCategory::ChurchHoliday),
    ];

    let sorted = set.sorted_by_date();
    assert_eq!(sorted.len(), expected.len());
    for (holiday, (d, name, category)) in sorted.iter().zip(expected.iter()) {
        assert_eq!(holiday.date(), *d);
        assert_eq!(holiday.name(), *name);
        assert_eq!(holiday.category(), *category);
    }
}

proptest! {
    #[test]
    fn prop_easter_between_march_22_and_april_25(year in 1583i32..=9999) {
        let easter = compute_easter(year).unwrap();
        prop_assert_eq!(easter.year(), year);
        prop_assert!(easter >= date(year, 3, 22));
        prop_assert!(easter <= date(year, 4, 25));
        prop_assert_eq!(easter.weekday(), chrono::Weekday::Sun);
    }

    #[test]
    fn prop_corpus_christi_is_easter_plus_60(year in 1583i32..=9999) {
        let easter = compute_easter(year).unwrap();
        let corpus_christi = compute_corpus_christi(year).unwrap();
        prop_assert_eq!(corpus_christi, easter + Days::new(60));
        prop_assert_eq!(corpus_christi.weekday(), chrono::Weekday::Thu);
    }

    #[test]
    fn prop_twelve_holidays_inside_the_year(year in 1583i32..=9999) {
        let set = compute_holidays(year).unwrap();
        prop_assert_eq!(set.len(), 12);
        prop_assert_eq!(set.public_holidays().count(), 3);
        prop_assert_eq!(set.church_holidays().count(), 9);
        for holiday in set.iter() {
            prop_assert_eq!(holiday.date().year(), year);
        }
    }

    #[test]
    fn prop_same_year_same_holidays(year in 1583i32..=9999) {
        prop_assert_eq!(compute_holidays(year).unwrap(), compute_holidays(year).unwrap());
    }
}
