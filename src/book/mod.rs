//! Address book
//!
//! The address book owns every contact record for the session, keyed by name,
//! and answers the upcoming-birthdays query.

pub mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::end_of_week;
