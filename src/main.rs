use std::io::{self, Write};
use std::process::ExitCode;

use chrono::{Datelike, Local, NaiveDate};
use log::{error, warn};

use daysoff::configuration::Configuration;
use daysoff::export::exportfilename::{CalendarTarget, ExportKind};
use daysoff::export::pdftable::{DaysOffTable, HolidayListTable};
use daysoff::selection::plannersession::PlannerSession;
use daysoff::selection::selectionstate::ToggleOutcome;
use daysoff::time::year::parse_year;

const DATE_FORMAT: &str = "%d-%m-%Y";
const DATE_FORMAT_HINT: &str = "not a date, expected DD-MM-YYYY";
const USAGE: &str = "usage: daysoff <year> [DD-MM-YYYY ...] [--config FILE] [--ics gmail|outlook]";

struct Args {
    year: String,
    dates: Vec<String>,
    config_path: Option<String>,
    ics_target: Option<String>
}

fn parse_args() -> Option<Args> {
    let mut args = std::env::args().skip(1);
    let mut positional: Vec<String> = Vec::new();
    let mut config_path = None;
    let mut ics_target = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(args.next()?),
            "--ics" => ics_target = Some(args.next()?),
            _ => positional.push(arg)
        }
    }
    if positional.is_empty() {
        return None;
    }
    let year = positional.remove(0);
    Some(Args { year, dates: positional, config_path, ics_target })
}

/// Toggles each `DD-MM-YYYY` argument and reports every one that was not
/// taken, whether it failed to parse or was rejected by the session.
fn toggle_dates<W: Write>(session: &mut PlannerSession, dates: &[String], out: &mut W) -> io::Result<()> {
    for text in dates {
        let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) else {
            warn!("skipping '{}': expected DD-MM-YYYY", text);
            writeln!(out, "{}: {}", text, DATE_FORMAT_HINT)?;
            continue;
        };
        if let ToggleOutcome::Rejected(reason) = session.toggle(date) {
            writeln!(out, "{}: {}", text, reason)?;
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config_path {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new()
    };

    let now = Local::now().naive_local();
    let year = parse_year(&args.year, &config.year_range(now.year()))?;
    let mut session = PlannerSession::open(year, config.capacity(), config.holiday_calculator())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", ExportKind::HolidayListPdf.file_name(year, now))?;
    HolidayListTable::new(session.holidays()).write_text(&mut out)?;
    writeln!(out)?;

    toggle_dates(&mut session, &args.dates, &mut out)?;

    writeln!(out)?;
    writeln!(out, "{}", ExportKind::DaysOffPdf.file_name(year, now))?;
    DaysOffTable::new(year, session.state()).write_text(&mut out)?;

    if let Some(target) = &args.ics_target {
        let target: CalendarTarget = target.parse()?;
        let calendar = config
            .icalendar_exporter()
            .export(session.state().selected(), now)?;
        writeln!(out)?;
        writeln!(out, "{}", ExportKind::ICalendar(target).file_name(year, now))?;
        write!(out, "{}", calendar)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(args) = parse_args() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daysoff::holiday::holidaycalculator::HolidayCalculator;

    #[test]
    fn reports_unparsable_and_rejected_dates() {
        let mut session = PlannerSession::open(2024, 26, &HolidayCalculator::default()).unwrap();
        let dates: Vec<String> = ["02-01-2024", "2024-01-03", "31-02-2024", "01-01-2024"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut out = Vec::new();
        toggle_dates(&mut session, &dates, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            "2024-01-03: not a date, expected DD-MM-YYYY",
            "31-02-2024: not a date, expected DD-MM-YYYY",
            "01-01-2024: You cannot select this date because it is a holiday."
        ]);
        assert_eq!(session.state().len(), 1);
    }
}
