//! Contact record model
//!
//! A record groups one contact's name, phone numbers and optional birthday.
//! Every mutation validates before it touches the record, so a failed call
//! leaves the record exactly as it was.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::birthday::Birthday;
use super::field::Field;
use super::name::Name;
use super::phone::Phone;
use crate::error::{ContactError, ContactResult};

/// Rendered in place of a birthday that was never set
pub const NO_BIRTHDAY: &str = "None";

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The phone entered first, which the `change` and `phone` commands act on
    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, value: &str) -> ContactResult<()> {
        let phone = Phone::parse(value)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Set the birthday. A birthday can be set only once per record.
    pub fn add_birthday(&mut self, value: &str) -> ContactResult<()> {
        if self.birthday.is_some() {
            return Err(ContactError::DuplicateBirthday);
        }

        let birthday = Birthday::parse(value)?;
        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Remove the first phone entry equal to `value`
    pub fn remove_phone(&mut self, value: &str) -> ContactResult<()> {
        let index = self.position_of(value)?;
        let removed = self.phones.remove(index);
        debug!(contact = %self.name, phone = %removed, "Removed phone");
        Ok(())
    }

    /// Replace the value of the phone entry equal to `old_value`
    ///
    /// `new_value` is stored as given, without a format check.
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> ContactResult<()> {
        let index = self.position_of(old_value)?;
        debug!(contact = %self.name, from = old_value, to = new_value, "Editing phone");
        self.phones[index].set_value(new_value);
        Ok(())
    }

    /// Look up a stored phone by value
    pub fn find_phone(&self, value: &str) -> ContactResult<&Phone> {
        self.phones
            .iter()
            .find(|phone| phone.value() == value)
            .ok_or_else(|| ContactError::phone_not_found(value))
    }

    /// Produce the one-line human-readable form of this record
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn position_of(&self, value: &str) -> ContactResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone.value() == value)
            .ok_or_else(|| ContactError::phone_not_found(value))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self.birthday.as_ref().map_or(NO_BIRTHDAY, Birthday::as_str);

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
