//! Configuration module for the assistant bot
//!
//! This module provides runtime preferences for the interactive session:
//! - conversation strings (greeting, prompt)
//! - the birthday window policy used by the `birthdays` command

pub mod settings;

pub use settings::{BirthdayWindow, Settings};
