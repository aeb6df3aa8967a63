use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use log::info;
use uuid::Uuid;

use super::exporterror::ExportError;

const CRLF: &str = "\r\n";
const PRODID: &str = "-//daysoff//Days Off Planner//EN";
const MINUTES_PER_DAY: i64 = 24 * 60;

pub const DEFAULT_REMINDER: NaiveTime = match NaiveTime::from_hms_opt(17, 30, 0) {
    Some(time) => time,
    None => panic!("17:30 is a valid time of day")
};

pub fn default_reminder() -> NaiveTime {
    DEFAULT_REMINDER
}

/// Builds `.ics` text with one all-day event per day off, each carrying a
/// display alarm at `reminder` on the day before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ICalendarExporter {
    reminder: NaiveTime
}

impl ICalendarExporter {
    pub fn new(reminder: NaiveTime) -> ICalendarExporter {
        ICalendarExporter { reminder }
    }

    pub fn reminder(&self) -> NaiveTime {
        self.reminder
    }

    /// Minutes between the reminder on the previous day and midnight of the
    /// day off; 390 for 17:30.
    pub fn trigger_minutes(&self) -> i64 {
        let since_midnight = (self.reminder - NaiveTime::MIN).num_minutes();
        MINUTES_PER_DAY - since_midnight
    }

    pub fn export(&self, dates: &[NaiveDate], generated_at: NaiveDateTime) -> Result<String, ExportError> {
        if dates.is_empty() {
            return Err(ExportError::EmptySelection);
        }

        let mut sorted = dates.to_vec();
        sorted.sort();
        sorted.dedup();

        let dtstamp = generated_at.format("%Y%m%dT%H%M%S").to_string();
        let mut lines: Vec<String> = vec![
            "BEGIN:VCALENDAR".to_owned(),
            "VERSION:2.0".to_owned(),
            format!("PRODID:{}", PRODID),
        ];
        for d in sorted.iter() {
            lines.extend(self.event_lines(*d, &dtstamp));
        }
        lines.push("END:VCALENDAR".to_owned());

        info!("exported {} days off to iCalendar", sorted.len());

        let mut calendar = lines.join(CRLF);
        calendar.push_str(CRLF);
        Ok(calendar)
    }

    fn event_lines(&self, d: NaiveDate, dtstamp: &str) -> Vec<String> {
        let end = d.checked_add_days(Days::new(1)).unwrap_or(d);
        vec![
            "BEGIN:VEVENT".to_owned(),
            format!("UID:{}", Uuid::new_v4()),
            format!("DTSTAMP:{}", dtstamp),
            format!("DTSTART;VALUE=DATE:{}", d.format("%Y%m%d")),
            format!("DTEND;VALUE=DATE:{}", end.format("%Y%m%d")),
            "SUMMARY:Day Off".to_owned(),
            "BEGIN:VALARM".to_owned(),
            "ACTION:DISPLAY".to_owned(),
            "DESCRIPTION:Reminder".to_owned(),
            format!("TRIGGER:-PT{}M", self.trigger_minutes()),
            "END:VALARM".to_owned(),
            "END:VEVENT".to_owned(),
        ]
    }
}

impl Default for ICalendarExporter {
    fn default() -> Self {
        ICalendarExporter::new(default_reminder())
    }
}
