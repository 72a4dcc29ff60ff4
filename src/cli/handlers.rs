//! Command handlers
//!
//! Each handler takes the positional arguments of one command, calls into the
//! address book and returns the reply text. Failures are returned as
//! `ContactError`; turning them into user-facing text is the caller's job.

use chrono::NaiveDate;

use crate::book::AddressBook;
use crate::config::BirthdayWindow;
use crate::display::{format_record_list, NO_BIRTHDAYS, NO_CONTACTS};
use crate::error::{ContactError, ContactResult};
use crate::models::record::NO_BIRTHDAY;
use crate::models::{ContactRecord, Field, Name};

fn wrong_arity(command: &'static str, expected: usize, args: &[String]) -> ContactError {
    ContactError::MissingArguments {
        command,
        expected,
        actual: args.len(),
    }
}

/// `add <name> <phone>`
pub fn add_contact(args: &[String], book: &mut AddressBook) -> ContactResult<String> {
    let [name, phone] = args else {
        return Err(wrong_arity("add", 2, args));
    };

    Name::new(name.as_str()).validate()?;
    if book.contains(name) {
        return Err(ContactError::AlreadyExists(name.clone()));
    }

    let mut record = ContactRecord::new(name.as_str());
    record.add_phone(phone)?;
    book.add_record(record);

    Ok("Contact added.".to_string())
}

/// `change <name> <new_phone>`: replaces the contact's first phone
pub fn change_contact(args: &[String], book: &mut AddressBook) -> ContactResult<String> {
    let [name, new_phone] = args else {
        return Err(wrong_arity("change", 2, args));
    };

    let record = book.find_mut(name)?;
    let old_phone = record
        .first_phone()
        .map(|phone| phone.value().to_string())
        .ok_or_else(|| ContactError::phone_not_found(format!("{} has no phone numbers", name)))?;
    record.edit_phone(&old_phone, new_phone)?;

    Ok("Contact updated.".to_string())
}

/// `phone <name>`: shows the contact's first phone
pub fn show_phone(args: &[String], book: &AddressBook) -> ContactResult<String> {
    let [name] = args else {
        return Err(wrong_arity("phone", 1, args));
    };

    let record = book.find(name)?;
    let first = record
        .first_phone()
        .ok_or_else(|| ContactError::phone_not_found(format!("{} has no phone numbers", name)))?;
    let phone = record.find_phone(first.value())?;

    Ok(phone.to_string())
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    format_record_list(book.all(), NO_CONTACTS)
}

/// `add-birthday <name> <YYYY.MM.DD>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> ContactResult<String> {
    let [name, birthday] = args else {
        return Err(wrong_arity("add-birthday", 2, args));
    };

    book.find_mut(name)?.add_birthday(birthday)?;

    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> ContactResult<String> {
    let [name] = args else {
        return Err(wrong_arity("show-birthday", 1, args));
    };

    let record = book.find(name)?;
    Ok(record
        .birthday()
        .map_or(NO_BIRTHDAY, |birthday| birthday.as_str())
        .to_string())
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, today: NaiveDate, window: BirthdayWindow) -> String {
    format_record_list(book.upcoming_birthdays(today, window), NO_BIRTHDAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn book_with_john() -> AddressBook {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        book
    }

    #[test]
    fn test_add_contact() {
        let mut book = AddressBook::new();
        let reply = add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        assert_eq!(reply, "Contact added.");
        assert!(book.contains("John"));
    }

    #[test]
    fn test_add_existing_contact() {
        let mut book = book_with_john();
        let err = add_contact(&args(&["John", "0000000000"]), &mut book).unwrap_err();
        assert_eq!(err, ContactError::AlreadyExists("John".into()));
        assert_eq!(
            show_phone(&args(&["John"]), &book).unwrap(),
            "1234567890"
        );
    }

    #[test]
    fn test_add_bad_phone_inserts_nothing() {
        let mut book = AddressBook::new();
        let err = add_contact(&args(&["John", "12345"]), &mut book).unwrap_err();
        assert!(matches!(err, ContactError::InvalidFormat(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_wrong_argument_count() {
        let mut book = AddressBook::new();
        assert!(matches!(
            add_contact(&args(&["John"]), &mut book),
            Err(ContactError::MissingArguments { expected: 2, actual: 1, .. })
        ));
        assert!(matches!(
            show_phone(&args(&["John", "extra"]), &book),
            Err(ContactError::MissingArguments { expected: 1, actual: 2, .. })
        ));
        assert!(matches!(
            add_birthday(&args(&[]), &mut book),
            Err(ContactError::MissingArguments { expected: 2, actual: 0, .. })
        ));
    }

    #[test]
    fn test_change_contact() {
        let mut book = book_with_john();
        let reply = change_contact(&args(&["John", "1111111111"]), &mut book).unwrap();
        assert_eq!(reply, "Contact updated.");
        assert_eq!(show_phone(&args(&["John"]), &book).unwrap(), "1111111111");
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = AddressBook::new();
        let err = change_contact(&args(&["Jane", "1111111111"]), &mut book).unwrap_err();
        assert!(matches!(err, ContactError::NotFound(_)));
    }

    #[test]
    fn test_phone_of_contact_without_phones() {
        let mut book = AddressBook::new();
        book.add_record(ContactRecord::new("Empty"));
        assert!(matches!(
            show_phone(&args(&["Empty"]), &book),
            Err(ContactError::PhoneNotFound(_))
        ));
    }

    #[test]
    fn test_birthday_flow() {
        let mut book = book_with_john();
        assert_eq!(show_birthday(&args(&["John"]), &book).unwrap(), "None");

        let reply = add_birthday(&args(&["John", "1990.05.20"]), &mut book).unwrap();
        assert_eq!(reply, "Birthday added.");

        let err = add_birthday(&args(&["John", "1991.01.01"]), &mut book).unwrap_err();
        assert_eq!(err, ContactError::DuplicateBirthday);
        assert_eq!(show_birthday(&args(&["John"]), &book).unwrap(), "1990.05.20");
    }

    #[test]
    fn test_add_bad_birthday() {
        let mut book = book_with_john();
        let err = add_birthday(&args(&["John", "20.05.1990"]), &mut book).unwrap_err();
        assert!(matches!(err, ContactError::InvalidFormat(_)));
        assert_eq!(show_birthday(&args(&["John"]), &book).unwrap(), "None");
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book), "No contacts available.");

        add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
        assert_eq!(
            show_all(&book),
            "Contact name: John, phones: 1234567890, birthday: None"
        );
    }

    #[test]
    fn test_birthdays() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let mut book = book_with_john();
        assert_eq!(
            birthdays(&book, today, BirthdayWindow::Unbounded),
            "No upcoming birthdays."
        );

        add_birthday(&args(&["John", "1990.06.20"]), &mut book).unwrap();
        assert_eq!(
            birthdays(&book, today, BirthdayWindow::Unbounded),
            "Contact name: John, phones: 1234567890, birthday: 1990.06.20"
        );
        assert_eq!(
            birthdays(&book, today, BirthdayWindow::EndOfWeek),
            "No upcoming birthdays."
        );
    }
}
