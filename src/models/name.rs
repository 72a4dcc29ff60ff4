//! Contact name

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::Field;
use crate::error::{ContactError, ContactResult};

/// The unique key of a contact within an address book
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }

    fn validate(&self) -> ContactResult<()> {
        if self.0.trim().is_empty() {
            return Err(ContactError::invalid_format("Contact name cannot be empty."));
        }
        Ok(())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
