//! Command layer between the REPL and the address book.
//!
//! A raw input line is split into a command word and positional arguments,
//! mapped to a [`Command`], and executed by [`CommandHandler`], which turns
//! every outcome (including errors) into the text shown to the user.

pub mod handler;

pub use handler::{CommandHandler, Reply};

use crate::error::ContactError;
use thiserror::Error;

/// Usage text printed for unknown commands and blank lines.
pub const GENERAL_USAGE: &str = "Invalid command. Usage: hello | all | add [name] [phone] | \
change [name] [phone] [new phone] | remove [name] [phone] | contact [name] | \
delete [name] | exit | close";

/// A recognised command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    All,
    Add,
    Change,
    Remove,
    Contact,
    Delete,
    Exit,
    Unknown,
}

impl Command {
    /// Map a lowercased command word to a command.
    pub fn parse(word: &str) -> Self {
        match word {
            "hello" => Self::Hello,
            "all" => Self::All,
            "add" => Self::Add,
            "change" => Self::Change,
            "remove" => Self::Remove,
            "contact" => Self::Contact,
            "delete" => Self::Delete,
            "exit" | "close" => Self::Exit,
            _ => Self::Unknown,
        }
    }

    /// Usage line shown when this command fails.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Add => "Invalid command. Usage: add [name] [phone]",
            Self::Change => "Invalid command. Usage: change [name] [phone] [new phone]",
            Self::Remove => "Invalid command. Usage: remove [name] [phone]",
            Self::Contact => "Invalid command. Usage: contact [name]",
            Self::Delete => "Invalid command. Usage: delete [name]",
            Self::Hello | Self::All | Self::Exit | Self::Unknown => GENERAL_USAGE,
        }
    }
}

/// Why a command could not be carried out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for the command
    #[error("wrong number of arguments")]
    WrongArguments,

    /// The address book rejected the operation
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl CommandError {
    /// Detail text appended to the usage line, if there is any.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::WrongArguments => None,
            Self::Contact(err) => Some(err.to_string()),
        }
    }
}

/// Render a failed command as user-facing text.
pub fn decorate(command: Command, err: &CommandError) -> String {
    match err.detail() {
        Some(detail) => format!("{}\nError: {}", command.usage(), detail),
        None => command.usage().to_string(),
    }
}

/// Split a line into a lowercased command word and its arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}
