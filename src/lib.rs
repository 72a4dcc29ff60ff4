//! Assistant bot - interactive command-line contact book
//!
//! This library provides the core functionality for the assistant bot. It keeps
//! names, phone numbers and birthdays in memory for a single session, validates
//! their formats, and answers lookups and upcoming-birthday queries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Session settings
//! - `error`: Custom error types
//! - `models`: Validated fields and the contact record
//! - `book`: The address book and the birthday window query
//! - `display`: Formatting of record lists
//! - `cli`: Input parsing, command handlers and the interactive loop
//!
//! # Example
//!
//! ```rust
//! use assistant_bot::cli::{Assistant, Outcome};
//! use assistant_bot::config::Settings;
//!
//! let mut assistant = Assistant::new(Settings::default());
//! assert_eq!(
//!     assistant.handle_line("add John 1234567890"),
//!     Outcome::Reply("Contact added.".to_string())
//! );
//! ```

pub mod book;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;

pub use error::{ContactError, ContactResult};
