//! Input line parsing
//!
//! A line is split on whitespace into a command word and positional arguments.
//! The command word is matched case-insensitively.

use std::fmt;

/// A command understood by the assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Anything else, as typed (lower-cased)
    Unknown(String),
}

impl Command {
    /// Parse a command word
    pub fn parse(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The fixed message printed when this command fails
    pub fn failure_message(&self) -> Option<&'static str> {
        match self {
            Self::Add => Some("Give me name and phone please."),
            Self::Change => Some("Give me name and new phone please."),
            Self::Phone => Some("Enter a name to get the phone."),
            Self::AddBirthday => Some("Give me name and birthday please."),
            Self::ShowBirthday => Some("Enter a name to get the birthday."),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hello => write!(f, "hello"),
            Self::Add => write!(f, "add"),
            Self::Change => write!(f, "change"),
            Self::Phone => write!(f, "phone"),
            Self::All => write!(f, "all"),
            Self::AddBirthday => write!(f, "add-birthday"),
            Self::ShowBirthday => write!(f, "show-birthday"),
            Self::Birthdays => write!(f, "birthdays"),
            Self::Exit => write!(f, "exit"),
            Self::Unknown(word) => write!(f, "{}", word),
        }
    }
}

/// Split a line into a command and its arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = Command::parse(tokens.next()?);
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}
