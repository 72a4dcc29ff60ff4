//! Contact record display formatting

use crate::models::ContactRecord;

/// Shown by `all` when the address book is empty
pub const NO_CONTACTS: &str = "No contacts available.";

/// Shown by `birthdays` when nothing matches
pub const NO_BIRTHDAYS: &str = "No upcoming birthdays.";

/// Format records one per line, or `empty_message` if there are none
pub fn format_record_list<'a>(
    records: impl IntoIterator<Item = &'a ContactRecord>,
    empty_message: &str,
) -> String {
    let lines: Vec<String> = records.into_iter().map(ContactRecord::render).collect();

    if lines.is_empty() {
        return empty_message.to_string();
    }

    lines.join("\n")
}
