use std::sync::Arc;

use serde::Deserialize;

use crate::time::recurringholiday::easterrelatedholiday::{EasterRelatedHoliday, SHIFT_DAYS_RANGE};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use super::holidaycalculator::{HolidayCalculator, HolidayRule};
use super::holidaycategory::HolidayCategory;
use super::holidayerror::{HolidayError, parse_json_value};

// ─────────────────────────────────────────────────────────────────────────────
// JSON 規則格式
//
// {"name": "New Year", "category": "Church Holiday", "holiday_type": "FixedDate", "month": 1, "day": 1}
// {"name": "Easter Monday", "category": "Church Holiday", "holiday_type": "EasterRelated", "shift_days": 1}
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, HolidayError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.month, json_prop.day)
        .ok_or_else(|| HolidayError::invalid_rule(
            name,
            format!("{}/{} is not a calendar date", json_prop.day, json_prop.month)
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    shift_days: i32
}

fn easter_related_holiday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, HolidayError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    let holiday = EasterRelatedHoliday::new(json_prop.shift_days)
        .ok_or_else(|| HolidayError::invalid_rule(
            name,
            format!(
                "shift of {} days is outside {}..={}",
                json_prop.shift_days,
                SHIFT_DAYS_RANGE.start(),
                SHIFT_DAYS_RANGE.end()
            )
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate
}

/// Category stays a plain string here so that unknown labels surface as
/// `UnknownCategory` rather than a generic JSON error.
#[derive(Deserialize)]
struct HolidayRuleJsonProp {
    name: String,
    category: String,
    holiday_type: HolidayType
}

pub fn holiday_rule_from_json(json: serde_json::Value) -> Result<HolidayRule, HolidayError> {
    let json_prop: HolidayRuleJsonProp = parse_json_value(json.clone())?;
    let category: HolidayCategory = json_prop.category.parse()?;
    let rule = match json_prop.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(&json_prop.name, json)?,
        HolidayType::FixedDate     => fixed_date_holiday_from_json(&json_prop.name, json)?
    };
    Ok(HolidayRule::new(json_prop.name, category, rule))
}

pub fn holiday_calculator_from_json_vec(json_vec: &[serde_json::Value]) -> Result<HolidayCalculator, HolidayError> {
    let mut rules = Vec::with_capacity(json_vec.len());
    for rule_json in json_vec.iter() {
        rules.push(holiday_rule_from_json(rule_json.clone())?);
    }
    Ok(HolidayCalculator::new(rules))
}
