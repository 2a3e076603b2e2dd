//! Contact data model.
//!
//! A [`Record`] holds one contact's phones; the [`AddressBook`] owns every
//! record of the session.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
