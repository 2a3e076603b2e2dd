//! Contact record: a name and the phone numbers stored under it.

use crate::domain::{Name, Phone};
use crate::error::{ContactError, ContactResult};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phones keep the order in which they were
/// added and never contain two numbers that normalize to the same value.
/// Every mutating method validates its input before touching the list, so a
/// failed call leaves the record unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Append a phone number.
    ///
    /// # Errors
    ///
    /// - `ContactError::InvalidPhone` if `raw` does not normalize
    /// - `ContactError::DuplicatePhone` if the number is already stored
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        let phone = Phone::new(raw)?;

        if self.phones.contains(&phone) {
            return Err(ContactError::DuplicatePhone);
        }

        debug!(contact = %self.name, phone = %phone, "adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number if it is stored. Absent numbers are ignored,
    /// malformed ones are still reported.
    pub fn remove_phone(&mut self, raw: &str) -> ContactResult<()> {
        if let Some(index) = self.position(raw)? {
            let removed = self.phones.remove(index);
            debug!(contact = %self.name, phone = %removed, "removed phone");
        }
        Ok(())
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// Replacing a number with itself is a no-op.
    ///
    /// # Errors
    ///
    /// - `ContactError::InvalidPhone` if either number does not normalize
    /// - `ContactError::PhoneNotFound` if `old` is not stored
    /// - `ContactError::DuplicatePhone` if `new` is already stored elsewhere
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self.position(old)?.ok_or(ContactError::PhoneNotFound)?;
        let replacement = Phone::new(new)?;

        match self.phones.iter().position(|p| *p == replacement) {
            Some(existing) if existing != index => return Err(ContactError::DuplicatePhone),
            _ => {}
        }

        debug!(
            contact = %self.name,
            old = %self.phones[index],
            new = %replacement,
            "editing phone"
        );
        self.phones[index] = replacement;
        Ok(())
    }

    /// Look up the stored phone equal to `raw` after normalization.
    pub fn find_phone(&self, raw: &str) -> ContactResult<Option<&Phone>> {
        Ok(self.position(raw)?.map(|index| &self.phones[index]))
    }

    fn position(&self, raw: &str) -> ContactResult<Option<usize>> {
        let target = Phone::new(raw)?;
        Ok(self.phones.iter().position(|p| *p == target))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
