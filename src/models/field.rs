//! The capability shared by every value stored on a contact record
//!
//! A field holds its raw string as given. Validation is an explicit step so
//! that callers decide when a value is accepted into a record.

use std::fmt;

use crate::error::ContactResult;

/// A renderable, validatable scalar stored on a record
pub trait Field: fmt::Display {
    /// The raw value exactly as entered
    fn value(&self) -> &str;

    /// Check the raw value against this field's format rule
    fn validate(&self) -> ContactResult<()>;
}
