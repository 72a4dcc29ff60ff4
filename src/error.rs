//! Custom error types for the assistant bot
//!
//! This module defines the error hierarchy for the contact book using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for contact book operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A phone number or birthday failed its format check
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The record already carries a birthday
    #[error("A birthday has already been added to this contact.")]
    DuplicateBirthday,

    /// No phone entry with the given value exists on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// Unknown contact name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// A contact with this name is already in the book
    #[error("Contact already exists: {0}")]
    AlreadyExists(String),

    /// Wrong number of arguments for a command
    #[error("'{command}' expects {expected} argument(s), got {actual}")]
    MissingArguments {
        command: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A month/day pair cannot be placed on the given year (Feb 29 on a non-leap year)
    #[error("Invalid date: {month:02}.{day:02} does not exist in {year}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ContactError {
    /// Create a "not found" error for a contact name
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a "not found" error for a phone value
    pub fn phone_not_found(phone: impl Into<String>) -> Self {
        Self::PhoneNotFound(phone.into())
    }

    /// Create an "invalid format" error with a human-readable reason
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat(reason.into())
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::invalid_format("Invalid format, must contain 10 digits.");
        assert_eq!(
            err.to_string(),
            "Invalid format: Invalid format, must contain 10 digits."
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = ContactError::contact_not_found("John");
        assert_eq!(err.to_string(), "Contact not found: John");
        assert!(matches!(err, ContactError::NotFound(_)));
    }

    #[test]
    fn test_missing_arguments_error() {
        let err = ContactError::MissingArguments {
            command: "add",
            expected: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "'add' expects 2 argument(s), got 1");
    }

    #[test]
    fn test_invalid_date_error() {
        let err = ContactError::InvalidDate {
            year: 2025,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "Invalid date: 02.29 does not exist in 2025");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ContactError = io_err.into();
        assert!(matches!(err, ContactError::Io(_)));
    }
}
