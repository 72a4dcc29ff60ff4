//! Birthday field
//!
//! Birthdays are entered as `YYYY.MM.DD`: a four-digit year, two-digit month and
//! two-digit day separated by dots. The three parts must form a real calendar
//! date. The raw string is kept verbatim once it passes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::Field;
use crate::error::{ContactError, ContactResult};

const INVALID_BIRTHDAY: &str = "Invalid format. Use the YYYY.MM.DD format.";

/// A birthday stored on a contact record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(String);

impl Birthday {
    /// Wrap a raw value without validating it
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Wrap a raw value, failing with `InvalidFormat` if it is not a valid date
    pub fn parse(value: impl Into<String>) -> ContactResult<Self> {
        let birthday = Self::new(value);
        birthday.validate()?;
        Ok(birthday)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The calendar date this birthday denotes
    pub fn date(&self) -> ContactResult<NaiveDate> {
        parse_strict(&self.0).ok_or_else(|| ContactError::invalid_format(INVALID_BIRTHDAY))
    }

    /// Month and day, independent of the birth year
    pub fn month_day(&self) -> ContactResult<(u32, u32)> {
        let date = self.date()?;
        Ok((date.month(), date.day()))
    }

    /// Place this birthday's month and day onto another year
    ///
    /// Fails with `InvalidDate` for Feb 29 on a non-leap year.
    pub fn on_year(&self, year: i32) -> ContactResult<NaiveDate> {
        let (month, day) = self.month_day()?;
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ContactError::InvalidDate { year, month, day })
    }
}

/// Parse `YYYY.MM.DD` with every digit present
fn parse_strict(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'.' || bytes[7] != b'.' {
        return None;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year: i32 = value[0..4].parse().ok()?;
    let month: u32 = value[5..7].parse().ok()?;
    let day: u32 = value[8..10].parse().ok()?;

    // Year zero is not a calendar year people are born in
    if year == 0 {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.0
    }

    fn validate(&self) -> ContactResult<()> {
        self.date().map(|_| ())
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_birthdays() {
        for value in ["1990.05.20", "2000.02.29", "0001.01.01", "2024.12.31"] {
            assert!(Birthday::parse(value).is_ok(), "{} should be valid", value);
        }
    }

    #[test]
    fn test_not_a_real_date() {
        for value in ["1990.02.30", "2023.02.29", "1990.13.01", "1990.00.10", "1990.01.00"] {
            let err = Birthday::parse(value).unwrap_err();
            assert!(
                matches!(err, ContactError::InvalidFormat(_)),
                "{} should be invalid",
                value
            );
        }
    }

    #[test]
    fn test_wrong_shape() {
        for value in [
            "",
            "1990.5.20",
            "1990-05-20",
            "20.05.1990",
            "90.05.20",
            "1990.05.20 ",
            "+990.05.20",
            "1990.05.2a",
        ] {
            assert!(
                Birthday::new(value).validate().is_err(),
                "{:?} should be invalid",
                value
            );
        }
    }

    #[test]
    fn test_raw_value_is_kept() {
        let birthday = Birthday::parse("1990.05.20").unwrap();
        assert_eq!(birthday.to_string(), "1990.05.20");
        assert_eq!(
            birthday.date().unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 20).unwrap()
        );
        assert_eq!(birthday.month_day().unwrap(), (5, 20));
    }

    #[test]
    fn test_on_year() {
        let birthday = Birthday::parse("1990.05.20").unwrap();
        assert_eq!(
            birthday.on_year(2025).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
        );
    }

    #[test]
    fn test_leap_day_on_non_leap_year() {
        let birthday = Birthday::parse("2000.02.29").unwrap();
        assert!(birthday.on_year(2024).is_ok());
        assert_eq!(
            birthday.on_year(2025),
            Err(ContactError::InvalidDate {
                year: 2025,
                month: 2,
                day: 29
            })
        );
    }
}
