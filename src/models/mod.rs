//! Core data models for the assistant bot
//!
//! This module contains the validated field types and the contact record that
//! aggregates them.

pub mod birthday;
pub mod field;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
pub use record::ContactRecord;
