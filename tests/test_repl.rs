//! End-to-end tests driving the assistant through its command loop.

use contact_assistant::repl::run_repl;
use contact_assistant::{AddressBook, Config};

async fn run_session(book: &mut AddressBook, input: &str) -> Vec<String> {
    let config = Config {
        prompt: "> ".to_string(),
        ..Config::default()
    };
    let mut output = Vec::new();
    run_repl(book, &config, input.as_bytes(), &mut output)
        .await
        .expect("session should complete");

    String::from_utf8(output)
        .expect("output should be utf-8")
        .lines()
        .map(|line| line.trim_start_matches("> ").to_string())
        .collect()
}

/// Two numbers added for one contact are listed in insertion order.
#[tokio::test]
async fn test_add_twice_then_show_contact() {
    let mut book = AddressBook::new();
    let output = run_session(
        &mut book,
        "add Alice 0501234567\nadd Alice 0509999999\ncontact Alice\nexit\n",
    )
    .await;

    assert_eq!(
        output,
        vec![
            "Welcome to the assistant bot!",
            "Contact number added.",
            "Contact number added.",
            "Contact name: Alice, phones: +380501234567; +380509999999",
            "Goodbye!",
        ]
    );
}

/// Errors are reported with usage text and the session carries on.
#[tokio::test]
async fn test_errors_do_not_end_session() {
    let mut book = AddressBook::new();
    let output = run_session(
        &mut book,
        "add Alice 12\ncontact Alice\nadd Alice 0501234567\nchange Alice 0501234567 0670000000\nall\nclose\n",
    )
    .await;

    assert_eq!(output[1], "Invalid command. Usage: add [name] [phone]");
    assert_eq!(output[2], "Error: Invalid phone number: 12");
    assert_eq!(output[3], "Invalid command. Usage: contact [name]");
    assert_eq!(output[4], "Error: No such contact.");
    assert_eq!(output[5], "Contact number added.");
    assert_eq!(output[6], "Contact number updated.");
    assert_eq!(output[7], "Contact name: Alice, phones: +380670000000");
    assert_eq!(output[8], "Goodbye!");
    assert_eq!(book.len(), 1);
}

/// The book outlives the session, so state is visible to the caller.
#[tokio::test]
async fn test_book_is_injected() {
    let mut book = AddressBook::new();
    run_session(&mut book, "add Carol 0630000000\n").await;
    run_session(&mut book, "add Dave 0631111111\ndelete Carol\n").await;

    let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Dave"]);
}
