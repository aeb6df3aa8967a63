use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::holidayerror::HolidayError;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HolidayCategory {
    PublicHoliday,
    ChurchHoliday
}

impl HolidayCategory {
    pub fn label(&self) -> &'static str {
        match self {
            HolidayCategory::PublicHoliday => "Public Holiday",
            HolidayCategory::ChurchHoliday => "Church Holiday"
        }
    }
}

impl fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the label in any case, with or without separators:
/// `"Public Holiday"`, `"public-holiday"`, `"PublicHoliday"`, `"church_holiday"`.
impl FromStr for HolidayCategory {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "publicholiday" => Ok(HolidayCategory::PublicHoliday),
            "churchholiday" => Ok(HolidayCategory::ChurchHoliday),
            _ => Err(HolidayError::UnknownCategory(s.to_owned()))
        }
    }
}

impl TryFrom<String> for HolidayCategory {
    type Error = HolidayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HolidayCategory> for String {
    fn from(category: HolidayCategory) -> String {
        category.label().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_variants() {
        for s in ["Public Holiday", "public holiday", "PublicHoliday", "public_holiday", " PUBLIC-HOLIDAY "] {
            assert_eq!(s.parse::<HolidayCategory>().unwrap(), HolidayCategory::PublicHoliday, "{s}");
        }
        for s in ["Church Holiday", "church holiday", "ChurchHoliday"] {
            assert_eq!(s.parse::<HolidayCategory>().unwrap(), HolidayCategory::ChurchHoliday, "{s}");
        }
    }

    #[test]
    fn rejects_unknown_labels() {
        for s in ["", "Holiday", "Bank Holiday", "publicholidays"] {
            assert!(matches!(
                s.parse::<HolidayCategory>(),
                Err(HolidayError::UnknownCategory(_))
            ), "{s}");
        }
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&HolidayCategory::ChurchHoliday).unwrap();
        assert_eq!(json, "\"Church Holiday\"");
        let parsed: HolidayCategory = serde_json::from_str("\"public holiday\"").unwrap();
        assert_eq!(parsed, HolidayCategory::PublicHoliday);
        assert!(serde_json::from_str::<HolidayCategory>("\"Feast\"").is_err());
    }
}
