//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the two contact fields, names
//! and phone numbers. Phones are normalized at construction time so an
//! invalid number can never be stored in a record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
