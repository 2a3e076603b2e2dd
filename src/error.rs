//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book and record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Phone number failed normalization
    #[error("{0}")]
    InvalidPhone(#[from] ValidationError),

    /// Phone number is already stored on the record
    #[error("Phone number already exists.")]
    DuplicatePhone,

    /// Phone number to edit is not stored on the record
    #[error("No such phone number.")]
    PhoneNotFound,

    /// A record with the same name is already in the book
    #[error("Contact already exists.")]
    ContactExists,

    /// No record with the given name
    #[error("No such contact.")]
    ContactNotFound,
}

/// Coarse classification of a [`ContactError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Duplicate,
    NotFound,
}

impl ContactError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPhone(_) => ErrorKind::Format,
            Self::DuplicatePhone | Self::ContactExists => ErrorKind::Duplicate,
            Self::PhoneNotFound | Self::ContactNotFound => ErrorKind::NotFound,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
