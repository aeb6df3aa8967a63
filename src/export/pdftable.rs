use std::io::Write;

use chrono::NaiveDate;

use crate::holiday::holidaycategory::HolidayCategory;
use crate::holiday::holidayset::HolidaySet;
use crate::selection::selectionstate::SelectionState;
use super::exporterror::ExportError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const CHURCH_HOLIDAY_COLOR: Rgb = Rgb(255, 0, 0);
pub const PUBLIC_HOLIDAY_COLOR: Rgb = Rgb(255, 165, 0);

pub fn category_color(category: HolidayCategory) -> Rgb {
    match category {
        HolidayCategory::ChurchHoliday => CHURCH_HOLIDAY_COLOR,
        HolidayCategory::PublicHoliday => PUBLIC_HOLIDAY_COLOR
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaysOffRow {
    pub date: String,
    pub day_of_week: String
}

/// Selected days off, oldest first, with their weekday names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaysOffTable {
    year: i32,
    rows: Vec<DaysOffRow>
}

impl DaysOffTable {
    pub fn new(year: i32, state: &SelectionState) -> DaysOffTable {
        let rows = state
            .sorted()
            .into_iter()
            .map(|d: NaiveDate| DaysOffRow {
                date: d.format("%d-%m-%Y").to_string(),
                day_of_week: d.format("%A").to_string()
            })
            .collect();
        DaysOffTable { year, rows }
    }

    pub fn headers(&self) -> [String; 2] {
        [format!("Your Days Off in {}", self.year), "Day of the Week".to_owned()]
    }

    pub fn rows(&self) -> &[DaysOffRow] {
        &self.rows
    }

    pub fn footer(&self) -> String {
        format!("Number of Selected Days: {}", self.rows.len())
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), ExportError> {
        let [date_header, weekday_header] = self.headers();
        writeln!(out, "{:<24} {}", date_header, weekday_header)?;
        for row in self.rows.iter() {
            writeln!(out, "{:<24} {}", row.date, row.day_of_week)?;
        }
        writeln!(out, "{}", self.footer())?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayListRow {
    pub position: usize,
    pub name: String,
    pub category: HolidayCategory,
    pub date: String,
    pub color: Rgb
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayListTable {
    year: i32,
    rows: Vec<HolidayListRow>
}

impl HolidayListTable {
    pub fn new(holidays: &HolidaySet) -> HolidayListTable {
        let rows = holidays
            .sorted_by_date()
            .into_iter()
            .enumerate()
            .map(|(index, holiday)| HolidayListRow {
                position: index + 1,
                name: holiday.name().to_owned(),
                category: holiday.category(),
                date: holiday.date().format("%a %b %d %Y").to_string(),
                color: category_color(holiday.category())
            })
            .collect();
        HolidayListTable { year: holidays.year(), rows }
    }

    pub fn title(&self) -> String {
        format!("List of Holidays for the Year {}", self.year)
    }

    pub fn rows(&self) -> &[HolidayListRow] {
        &self.rows
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), ExportError> {
        writeln!(out, "{}", self.title())?;
        for row in self.rows.iter() {
            writeln!(
                out,
                "{:>3}.) {:<28} - {} - {}",
                row.position,
                row.name,
                row.category,
                row.date
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::holidaycalculator::compute_holidays;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_off_rows_are_sorted() {
        let holidays = compute_holidays(2024).unwrap();
        let mut state = SelectionState::default();
        state.toggle(date(2024, 12, 27), &holidays);
        state.toggle(date(2024, 12, 24), &holidays);

        let table = DaysOffTable::new(2024, &state);
        assert_eq!(table.headers()[0], "Your Days Off in 2024");
        assert_eq!(table.rows()[0], DaysOffRow {
            date: "24-12-2024".to_owned(),
            day_of_week: "Tuesday".to_owned()
        });
        assert_eq!(table.rows()[1].day_of_week, "Friday");
        assert_eq!(table.footer(), "Number of Selected Days: 2");
    }

    #[test]
    fn holiday_list_rows() {
        let holidays = compute_holidays(2024).unwrap();
        let table = HolidayListTable::new(&holidays);
        assert_eq!(table.title(), "List of Holidays for the Year 2024");
        assert_eq!(table.rows().len(), 12);

        let first = &table.rows()[0];
        assert_eq!(first.position, 1);
        assert_eq!(first.name, "New Year");
        assert_eq!(first.date, "Mon Jan 01 2024");
        assert_eq!(first.color, CHURCH_HOLIDAY_COLOR);

        let labour_day = table.rows().iter().find(|r| r.name == "Labour Day").unwrap();
        assert_eq!(labour_day.color, PUBLIC_HOLIDAY_COLOR);
        assert_eq!(table.rows()[11].name, "2nd day of Christmas");
    }

    #[test]
    fn writes_plain_text() {
        let holidays = compute_holidays(2024).unwrap();
        let mut buf = Vec::new();
        HolidayListTable::new(&holidays).write_text(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("List of Holidays for the Year 2024\n"));
        assert!(out.contains("Corpus Christi"));
        assert!(out.contains("- Public Holiday -"));

        let mut buf = Vec::new();
        DaysOffTable::new(2024, &SelectionState::default()).write_text(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Number of Selected Days: 0"));
    }
}
