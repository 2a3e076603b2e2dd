//! Command handlers operating on an injected address book.

use super::{decorate, parse_input, Command, CommandError, GENERAL_USAGE};
use crate::models::{AddressBook, Record};
use tracing::{debug, warn};

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command
    Continue(String),
    /// Print the text and stop the session
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Exit(text) => text,
        }
    }
}

type CommandResult = Result<String, CommandError>;

/// Executes commands against an address book.
pub struct CommandHandler<'a> {
    book: &'a mut AddressBook,
}

impl<'a> CommandHandler<'a> {
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    /// Parse and execute one input line.
    pub fn dispatch(&mut self, line: &str) -> Reply {
        let Some((word, args)) = parse_input(line) else {
            return Reply::Continue(GENERAL_USAGE.to_string());
        };
        let command = Command::parse(&word);
        debug!(command = %word, args = args.len(), "dispatching");

        let result = match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::All => Ok(self.all_contacts()),
            Command::Add => self.add_contact_number(&args),
            Command::Change => self.change_contact_number(&args),
            Command::Remove => self.remove_contact_number(&args),
            Command::Contact => self.get_contact(&args),
            Command::Delete => self.delete_contact(&args),
            Command::Exit => return Reply::Exit("Goodbye!".to_string()),
            Command::Unknown => Ok(GENERAL_USAGE.to_string()),
        };

        match result {
            Ok(text) => Reply::Continue(text),
            Err(err) => {
                warn!(command = %word, error = %err, "command rejected");
                Reply::Continue(decorate(command, &err))
            }
        }
    }

    /// Add a phone to a contact, creating the contact if needed.
    ///
    /// A new contact is only stored once its first phone is accepted.
    pub fn add_contact_number(&mut self, args: &[String]) -> CommandResult {
        let [name, phone] = args else {
            return Err(CommandError::WrongArguments);
        };

        match self.book.get_mut(name) {
            Some(record) => record.add_phone(phone)?,
            None => {
                let mut record = Record::new(name.as_str());
                record.add_phone(phone)?;
                self.book.add_record(record)?;
            }
        }

        Ok("Contact number added.".to_string())
    }

    pub fn change_contact_number(&mut self, args: &[String]) -> CommandResult {
        let [name, phone, new_phone] = args else {
            return Err(CommandError::WrongArguments);
        };

        self.book.find_mut(name)?.edit_phone(phone, new_phone)?;
        Ok("Contact number updated.".to_string())
    }

    pub fn remove_contact_number(&mut self, args: &[String]) -> CommandResult {
        let [name, phone] = args else {
            return Err(CommandError::WrongArguments);
        };

        self.book.find_mut(name)?.remove_phone(phone)?;
        Ok("Contact number removed.".to_string())
    }

    pub fn delete_contact(&mut self, args: &[String]) -> CommandResult {
        let [name] = args else {
            return Err(CommandError::WrongArguments);
        };

        self.book.delete(name);
        Ok("Contact deleted.".to_string())
    }

    pub fn get_contact(&self, args: &[String]) -> CommandResult {
        let [name] = args else {
            return Err(CommandError::WrongArguments);
        };

        Ok(self.book.find(name)?.to_string())
    }

    /// One rendered record per line.
    pub fn all_contacts(&self) -> String {
        if self.book.is_empty() {
            return "No contacts saved.".to_string();
        }

        self.book
            .records()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
