//! Interactive session
//!
//! The assistant owns the address book for one session, dispatches each input
//! line to its handler and turns handler failures into the command's fixed
//! reply.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::command::{parse_input, Command};
use super::handlers;
use crate::book::AddressBook;
use crate::config::Settings;
use crate::error::ContactResult;

/// Reply to any command the assistant does not know
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Reply to `hello`
pub const HELLO_REPLY: &str = "How can I help you?";

/// Printed when the session ends
pub const GOODBYE: &str = "Good bye!";

/// What the session should do after one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep going
    Reply(String),
    /// Nothing to print (blank line)
    Silent,
    /// Print the text and end the session
    Exit(String),
}

/// One interactive session over an address book
pub struct Assistant {
    book: AddressBook,
    settings: Settings,
}

impl Assistant {
    /// Start a session with an empty address book
    pub fn new(settings: Settings) -> Self {
        Self {
            book: AddressBook::new(),
            settings,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Process one line of input
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let Some((command, args)) = parse_input(line) else {
            return Outcome::Silent;
        };

        let result = match &command {
            Command::Exit => return Outcome::Exit(GOODBYE.to_string()),
            Command::Hello => Ok(HELLO_REPLY.to_string()),
            Command::Add => handlers::add_contact(&args, &mut self.book),
            Command::Change => handlers::change_contact(&args, &mut self.book),
            Command::Phone => handlers::show_phone(&args, &self.book),
            Command::All => Ok(handlers::show_all(&self.book)),
            Command::AddBirthday => handlers::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(&args, &self.book),
            Command::Birthdays => Ok(handlers::birthdays(
                &self.book,
                self.today(),
                self.settings.birthday_window,
            )),
            Command::Unknown(word) => {
                debug!(command = %word, "Unknown command");
                return Outcome::Reply(INVALID_COMMAND.to_string());
            }
        };

        match result {
            Ok(reply) => Outcome::Reply(reply),
            Err(e) => {
                debug!(command = %command, error = %e, "Command failed");
                let message = command.failure_message().unwrap_or(INVALID_COMMAND);
                Outcome::Reply(message.to_string())
            }
        }
    }

    /// Run the read-eval-print loop until `close`/`exit` or end of input
    ///
    /// A line that is not valid UTF-8 is answered with "Invalid command." and
    /// the session continues. Only a failing reader or writer ends it early.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> ContactResult<()> {
        info!(window = %self.settings.birthday_window, "Session started");
        writeln!(output, "{}", self.settings.greeting)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.settings.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                writeln!(output, "{}", GOODBYE)?;
                break;
            }

            let outcome = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    warn!(error = %e, "Ignoring input that is not valid UTF-8");
                    Outcome::Reply(INVALID_COMMAND.to_string())
                }
            };

            match outcome {
                Outcome::Reply(text) => writeln!(output, "{}", text)?,
                Outcome::Silent => {}
                Outcome::Exit(text) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
            }
        }

        info!(contacts = self.book.len(), "Session ended");
        Ok(())
    }

    fn today(&self) -> NaiveDate {
        self.settings
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
