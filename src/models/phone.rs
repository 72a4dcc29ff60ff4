//! Phone number field
//!
//! A phone number is accepted only as a string of exactly ten ASCII digits.
//! No formatting characters are stripped and no normalization takes place.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::Field;
use crate::error::{ContactError, ContactResult};

/// Number of digits a phone number must contain
pub const PHONE_LENGTH: usize = 10;

/// A phone number stored on a contact record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Wrap a raw value without validating it
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Wrap a raw value, failing with `InvalidFormat` if it is not a phone number
    pub fn parse(value: impl Into<String>) -> ContactResult<Self> {
        let phone = Self::new(value);
        phone.validate()?;
        Ok(phone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace the stored value. The new value is not validated.
    pub(crate) fn set_value(&mut self, value: impl Into<String>) {
        self.0 = value.into();
    }
}

impl Field for Phone {
    fn value(&self) -> &str {
        &self.0
    }

    fn validate(&self) -> ContactResult<()> {
        if self.0.len() == PHONE_LENGTH && self.0.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(ContactError::invalid_format(
                "Invalid format, must contain 10 digits.",
            ))
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        for value in ["1234567890", "0000000000", "9999999999"] {
            assert!(Phone::parse(value).is_ok(), "{} should be valid", value);
        }
    }

    #[test]
    fn test_wrong_length() {
        for value in ["", "123456789", "12345678901"] {
            let err = Phone::parse(value).unwrap_err();
            assert!(matches!(err, ContactError::InvalidFormat(_)));
        }
    }

    #[test]
    fn test_non_digit_characters() {
        for value in ["123-456-78", "12345 6789", "+123456789", "12345abcde"] {
            assert!(
                Phone::new(value).validate().is_err(),
                "{} should be invalid",
                value
            );
        }
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Ten Arabic-Indic digits: ten chars, but not ASCII
        assert!(Phone::new("٠١٢٣٤٥٦٧٨٩").validate().is_err());
    }

    #[test]
    fn test_set_value_skips_validation() {
        let mut phone = Phone::parse("1234567890").unwrap();
        phone.set_value("abc");
        assert_eq!(phone.as_str(), "abc");
        assert!(phone.validate().is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let phone = Phone::new("1234567890");
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"1234567890\"");
    }
}
