//! Owning collection of contact records
//!
//! Records are kept in insertion order with a name index on the side.

use std::collections::HashMap;
use tracing::debug;

use crate::error::{ContactError, ContactResult};
use crate::models::ContactRecord;

/// All contacts of the session, keyed by name
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
    /// Index: name -> position in `records`
    by_name: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record of the same name
    ///
    /// A replaced record keeps its original position. Rejecting duplicate names
    /// is up to the caller.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.by_name.get(record.name()) {
            Some(&index) => {
                debug!(contact = record.name(), "Replacing record");
                self.records[index] = record;
            }
            None => {
                debug!(contact = record.name(), "Inserting record");
                self.by_name
                    .insert(record.name().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Remove and return the record for `name`
    pub fn delete(&mut self, name: &str) -> ContactResult<ContactRecord> {
        let index = self
            .by_name
            .remove(name)
            .ok_or_else(|| ContactError::contact_not_found(name))?;

        let record = self.records.remove(index);
        for position in self.by_name.values_mut() {
            if *position > index {
                *position -= 1;
            }
        }

        debug!(contact = name, "Deleted record");
        Ok(record)
    }

    /// Get the record for `name`
    pub fn find(&self, name: &str) -> ContactResult<&ContactRecord> {
        self.by_name
            .get(name)
            .map(|&index| &self.records[index])
            .ok_or_else(|| ContactError::contact_not_found(name))
    }

    /// Get the record for `name` for modification
    pub fn find_mut(&mut self, name: &str) -> ContactResult<&mut ContactRecord> {
        match self.by_name.get(name) {
            Some(&index) => Ok(&mut self.records[index]),
            None => Err(ContactError::contact_not_found(name)),
        }
    }

    /// Check whether a record exists for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate over all records in insertion order
    ///
    /// Each call starts a fresh traversal.
    pub fn all(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
