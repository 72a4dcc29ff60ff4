//! Upcoming birthdays query
//!
//! A birthday is "upcoming" when its month and day, placed on the current
//! year, fall on or after today. With [`BirthdayWindow::EndOfWeek`] the match
//! is additionally capped at the coming Sunday.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::warn;

use super::AddressBook;
use crate::config::BirthdayWindow;
use crate::models::ContactRecord;

/// The Sunday closing the week that contains `today` (today itself on a Sunday)
pub fn end_of_week(today: NaiveDate) -> NaiveDate {
    let days_left = 6 - i64::from(today.weekday().num_days_from_monday());
    today + Duration::days(days_left)
}

impl AddressBook {
    /// Records whose birthday falls within the window starting at `today`,
    /// in address book order
    ///
    /// A Feb 29 birthday has no date in a non-leap year; such records are
    /// skipped with a warning instead of failing the whole query.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window: BirthdayWindow,
    ) -> Vec<&ContactRecord> {
        let week_end = end_of_week(today);

        self.all()
            .filter(|record| {
                let Some(birthday) = record.birthday() else {
                    return false;
                };

                let this_year = match birthday.on_year(today.year()) {
                    Ok(date) => date,
                    Err(e) => {
                        warn!(contact = record.name(), error = %e, "Skipping birthday");
                        return false;
                    }
                };

                match window {
                    BirthdayWindow::Unbounded => today <= this_year,
                    BirthdayWindow::EndOfWeek => today <= this_year && this_year <= week_end,
                }
            })
            .collect()
    }

    /// Upcoming birthdays relative to the local calendar date
    pub fn birthdays_per_week(&self, window: BirthdayWindow) -> Vec<&ContactRecord> {
        let today = chrono::Local::now().date_naive();
        self.upcoming_birthdays(today, window)
    }
}
