use thiserror::Error;

pub const DEFAULT_YEAR_WINDOW: u32 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum YearParseError {
    #[error("Please fill out this field.")]
    Missing,
    #[error("The year must be a valid number.")]
    NotANumber,
    #[error("The year must not start with a zero.")]
    LeadingZero,
    #[error("The year must be at least {min}.")]
    TooEarly { min: i32 },
    #[error("The year must be no more than {max}.")]
    TooLate { max: i32 }
}

/// Inclusive window of years a planner may be opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    min: i32,
    max: i32
}

impl YearRange {
    pub fn new(y1: i32, y2: i32) -> YearRange {
        if y1 > y2 {
            YearRange { min: y2, max: y1 }
        } else {
            YearRange { min: y1, max: y2 }
        }
    }

    /// `current_year - window ..= current_year + window`
    pub fn around(current_year: i32, window: u32) -> YearRange {
        YearRange::new(
            current_year.saturating_sub_unsigned(window),
            current_year.saturating_add_unsigned(window)
        )
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

/// Validates a year typed by the user.
///
/// Only plain ASCII digits are accepted: signs, decimals, exponents and
/// leading zeros are all rejected before the range check.
pub fn parse_year(input: &str, range: &YearRange) -> Result<i32, YearParseError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(YearParseError::Missing);
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(YearParseError::NotANumber);
    }
    if value.starts_with('0') {
        return Err(YearParseError::LeadingZero);
    }

    // all digits, so the only possible failure is overflow
    let year = match value.parse::<i32>() {
        Ok(year) => year,
        Err(_) => return Err(YearParseError::TooLate { max: range.max() })
    };

    if year < range.min() {
        Err(YearParseError::TooEarly { min: range.min() })
    } else if year > range.max() {
        Err(YearParseError::TooLate { max: range.max() })
    } else {
        Ok(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> YearRange {
        YearRange::around(2026, DEFAULT_YEAR_WINDOW)
    }

    #[test]
    fn window_bounds() {
        let r = range();
        assert_eq!(r.min(), 2021);
        assert_eq!(r.max(), 2031);
        assert!(r.contains(2026));
        assert!(!r.contains(2032));
    }

    #[test]
    fn huge_window_saturates() {
        let r = YearRange::around(2026, u32::MAX);
        assert_eq!(r.min(), i32::MIN);
        assert_eq!(r.max(), i32::MAX);
        assert!(r.contains(1));
    }

    #[test]
    fn accepts_year_in_window() {
        assert_eq!(parse_year("2024", &range()), Ok(2024));
        assert_eq!(parse_year("  2031 ", &range()), Ok(2031));
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(parse_year("", &range()), Err(YearParseError::Missing));
        assert_eq!(parse_year("   ", &range()), Err(YearParseError::Missing));
    }

    #[test]
    fn rejects_non_digits() {
        for input in ["20a4", "2024.0", "-2024", "+2024", "2e3"] {
            assert_eq!(parse_year(input, &range()), Err(YearParseError::NotANumber), "{input}");
        }
    }

    #[test]
    fn rejects_leading_zero() {
        assert_eq!(parse_year("02024", &range()), Err(YearParseError::LeadingZero));
    }

    #[test]
    fn rejects_out_of_window() {
        assert_eq!(parse_year("2020", &range()), Err(YearParseError::TooEarly { min: 2021 }));
        assert_eq!(parse_year("2032", &range()), Err(YearParseError::TooLate { max: 2031 }));
        assert_eq!(parse_year("99999999999", &range()), Err(YearParseError::TooLate { max: 2031 }));
    }

    #[test]
    fn messages() {
        assert_eq!(YearParseError::TooEarly { min: 2021 }.to_string(), "The year must be at least 2021.");
        assert_eq!(YearParseError::NotANumber.to_string(), "The year must be a valid number.");
    }
}
