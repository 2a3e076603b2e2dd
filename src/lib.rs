//! Contact assistant - an interactive command-line phone book.
//!
//! Contacts live in memory for the duration of one session. Each contact has
//! a name and an ordered list of unique, normalized phone numbers.
//!
//! # Architecture
//!
//! - **domain**: Value objects for names and normalized phone numbers
//! - **models**: Contact records and the address book that owns them
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **commands**: Command parsing, execution and error decoration
//! - **repl**: The line-oriented loop driving the command handlers

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use commands::{CommandHandler, Reply};
pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{ConfigError, ContactError, ErrorKind};
pub use models::{AddressBook, Record};
