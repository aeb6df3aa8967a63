use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use super::exporterror::ExportError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CalendarTarget {
    Gmail,
    Outlook
}

impl CalendarTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarTarget::Gmail => "gmail",
            CalendarTarget::Outlook => "outlook"
        }
    }
}

impl fmt::Display for CalendarTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarTarget {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gmail" => Ok(CalendarTarget::Gmail),
            "outlook" => Ok(CalendarTarget::Outlook),
            _ => Err(ExportError::UnknownTarget(s.to_owned()))
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExportKind {
    DaysOffPdf,
    HolidayListPdf,
    ICalendar(CalendarTarget)
}

impl ExportKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::DaysOffPdf | ExportKind::HolidayListPdf => "pdf",
            ExportKind::ICalendar(_) => "ics"
        }
    }

    /// `your_days_off_in_2024-saved_21-12-2024_14_30_45.pdf`
    ///
    /// The save time uses `_` between fields so the name is valid on every
    /// file system.
    pub fn file_name(&self, year: i32, saved_at: NaiveDateTime) -> String {
        let stem = match self {
            ExportKind::DaysOffPdf => format!("your_days_off_in_{}", year),
            ExportKind::HolidayListPdf => format!("all_holidays_in_{}", year),
            ExportKind::ICalendar(target) => format!("{}-your_days_off_in_{}", target, year)
        };
        format!(
            "{}-saved_{}.{}",
            stem,
            saved_at.format("%d-%m-%Y_%H_%M_%S"),
            self.extension()
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn saved_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 21).unwrap().and_hms_opt(14, 30, 45).unwrap()
    }

    #[test]
    fn pdf_names() {
        assert_eq!(
            ExportKind::DaysOffPdf.file_name(2024, saved_at()),
            "your_days_off_in_2024-saved_21-12-2024_14_30_45.pdf"
        );
        assert_eq!(
            ExportKind::HolidayListPdf.file_name(2025, saved_at()),
            "all_holidays_in_2025-saved_21-12-2024_14_30_45.pdf"
        );
    }

    #[test]
    fn icalendar_names() {
        assert_eq!(
            ExportKind::ICalendar(CalendarTarget::Gmail).file_name(2024, saved_at()),
            "gmail-your_days_off_in_2024-saved_21-12-2024_14_30_45.ics"
        );
        assert_eq!(ExportKind::ICalendar(CalendarTarget::Outlook).extension(), "ics");
    }

    #[test]
    fn parses_targets() {
        assert_eq!("Gmail".parse::<CalendarTarget>().unwrap(), CalendarTarget::Gmail);
        assert_eq!("outlook".parse::<CalendarTarget>().unwrap(), CalendarTarget::Outlook);
        assert!(matches!("yahoo".parse::<CalendarTarget>(), Err(ExportError::UnknownTarget(_))));
    }
}
