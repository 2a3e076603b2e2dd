//! In-memory address book keyed by contact name.

use super::record::Record;
use crate::domain::Name;
use crate::error::{ContactError, ContactResult};
use indexmap::IndexMap;
use tracing::debug;

/// All contact records of a session, at most one per name.
///
/// Records are kept in insertion order; deleting a record does not reorder
/// the remaining ones.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: IndexMap<Name, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::ContactExists` if a record with the same name is
    /// already stored; the stored record is left untouched.
    pub fn add_record(&mut self, record: Record) -> ContactResult<()> {
        if self.records.contains_key(record.name()) {
            return Err(ContactError::ContactExists);
        }

        debug!(contact = %record.name(), "adding record");
        self.records.insert(record.name().clone(), record);
        Ok(())
    }

    /// Find a record by name, failing with `ContactError::ContactNotFound`
    /// when it is missing.
    pub fn find(&self, name: &str) -> ContactResult<&Record> {
        self.get(name).ok_or(ContactError::ContactNotFound)
    }

    /// Mutable variant of [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> ContactResult<&mut Record> {
        self.get_mut(name).ok_or(ContactError::ContactNotFound)
    }

    /// Non-failing lookup.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(&Name::from(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&Name::from(name))
    }

    /// Delete the record stored under `name`. Missing names are ignored.
    pub fn delete(&mut self, name: &str) {
        if let Some(record) = self.records.shift_remove(&Name::from(name)) {
            debug!(contact = %record.name(), "deleted record");
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
