//! Display formatting for terminal output
//!
//! Provides utilities for formatting contact records for the interactive session.

pub mod record;

pub use record::{format_record_list, NO_BIRTHDAYS, NO_CONTACTS};
