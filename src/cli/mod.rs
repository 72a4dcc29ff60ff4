//! Command-line session
//!
//! This module contains the input parser, the per-command handlers and the
//! interactive loop that ties them to an address book.

pub mod assistant;
pub mod command;
pub mod handlers;

pub use assistant::{Assistant, Outcome};
pub use command::{parse_input, Command};
