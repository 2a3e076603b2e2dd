//! Line-oriented command loop.
//!
//! The loop is generic over its reader and writer so that the binary can run
//! it on stdin/stdout while tests drive it with in-memory buffers.

use crate::commands::{CommandHandler, Reply};
use crate::config::Config;
use crate::models::AddressBook;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Greeting printed once when the session starts.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Run the assistant until `exit`/`close` or end of input.
///
/// # Arguments
/// * `book` - The session's address book
/// * `config` - Provides the prompt text
/// * `reader` - Source of command lines
/// * `writer` - Destination for prompts and replies
pub async fn run_repl<R, W>(
    book: &mut AddressBook,
    config: &Config,
    reader: R,
    mut writer: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", GREETING).as_bytes()).await?;
    let mut lines = reader.lines();
    let mut handler = CommandHandler::new(book);

    loop {
        writer.write_all(config.prompt.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("input closed");
            writer.write_all(b"\n").await?;
            break;
        };

        let reply = handler.dispatch(&line);
        writer.write_all(format!("{}\n", reply.text()).as_bytes()).await?;

        if let Reply::Exit(_) = reply {
            info!("session ended by user");
            break;
        }
    }

    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn session(input: &str) -> (String, AddressBook) {
        let mut book = AddressBook::new();
        let mut output = Vec::new();
        run_repl(&mut book, &Config::default(), input.as_bytes(), &mut output)
            .await
            .unwrap();
        (String::from_utf8(output).unwrap(), book)
    }

    #[tokio::test]
    async fn test_greeting_and_exit() {
        let (output, _) = session("hello\nexit\n").await;
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Goodbye!\n"
        );
    }

    #[tokio::test]
    async fn test_stops_reading_after_exit() {
        let (_, book) = session("close\nadd Alice 0501234567\n").await;
        assert!(book.is_empty());
    }

    #[tokio::test]
    async fn test_end_of_input_ends_session() {
        let (output, book) = session("add Alice 0501234567").await;
        assert!(output.contains("Contact number added."));
        assert!(output.ends_with("Enter a command: \n"));
        assert_eq!(book.len(), 1);
    }
}
