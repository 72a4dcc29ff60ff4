//! User settings for the assistant bot
//!
//! Settings live only for the current session. They are assembled from
//! command-line flags (or their environment variable fallbacks) in `main`.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// How far forward the `birthdays` query looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BirthdayWindow {
    /// Every birthday from today until the end of the calendar year
    #[default]
    Unbounded,
    /// Only birthdays from today up to and including the coming Sunday
    EndOfWeek,
}

impl fmt::Display for BirthdayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::EndOfWeek => write!(f, "end-of-week"),
        }
    }
}

/// Session settings
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Printed once when the loop starts
    pub greeting: String,

    /// Printed before every line of input
    pub prompt: String,

    /// Window policy for upcoming birthdays
    pub birthday_window: BirthdayWindow,

    /// Calendar date used by the birthday query instead of the local clock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

fn default_greeting() -> String {
    "Welcome to the assistant bot!".to_string()
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            prompt: default_prompt(),
            birthday_window: BirthdayWindow::default(),
            today: None,
        }
    }
}

impl Settings {
    /// Override the greeting if one is given
    pub fn with_greeting(mut self, greeting: Option<String>) -> Self {
        if let Some(greeting) = greeting {
            self.greeting = greeting;
        }
        self
    }

    /// Override the prompt if one is given
    pub fn with_prompt(mut self, prompt: Option<String>) -> Self {
        if let Some(prompt) = prompt {
            self.prompt = prompt;
        }
        self
    }

    /// Override the birthday window policy
    pub fn with_birthday_window(mut self, window: BirthdayWindow) -> Self {
        self.birthday_window = window;
        self
    }

    /// Pin the calendar date used by the birthday query
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }

    /// Render the effective settings as pretty JSON
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
