//! End-to-end tests for the command flow.
//!
//! These tests drive the dispatcher and the loop the way a user session
//! would: one line in, one reply out, with the address book carrying
//! state between commands.

use contact_assistant::{dispatch, AddressBook, Config, Dispatch};
use std::io::Cursor;

fn reply(line: &str, book: &mut AddressBook, config: &Config) -> String {
    match dispatch(line, book, config) {
        Dispatch::Reply(text) => text,
        Dispatch::Exit => panic!("Unexpected exit for line: {}", line),
    }
}

/// Test the documented happy path: add a contact, set a birthday, list
/// the book.
#[test]
fn test_add_then_birthday_then_all() {
    let config = Config::default();
    let mut book = AddressBook::new();

    let added = reply("add Alice 1234567890", &mut book, &config);
    assert_eq!(added, "Contact Alice added/updated with phone 1234567890.");

    let birthday = reply("add-birthday Alice 01.01.2020", &mut book, &config);
    assert_eq!(birthday, "Birthday added for Alice.");

    let all = reply("all", &mut book, &config);
    assert!(all.contains("Alice"));
    assert!(all.contains("1234567890"));
    assert!(all.contains("01.01.2020"));
}

/// Two adds under the same name extend one record instead of creating a
/// second one.
#[test]
fn test_repeated_add_extends_one_record() {
    let config = Config::default();
    let mut book = AddressBook::new();

    reply("add Alice 1234567890", &mut book, &config);
    reply("add Alice 0987654321", &mut book, &config);

    assert_eq!(book.len(), 1);
    let phones = reply("phone Alice", &mut book, &config);
    assert_eq!(phones, "Alice: 1234567890, 0987654321");
}

/// A rejected phone reports the 10-digit rule and leaves no partial
/// record behind.
#[test]
fn test_invalid_phone_leaves_no_partial_record() {
    let config = Config::default();
    let mut book = AddressBook::new();

    let error = reply("add Bob 12345", &mut book, &config);
    assert!(error.starts_with("Error: "));
    assert!(error.contains("10 digits"));

    assert!(book.find("Bob").is_none());
    let all = reply("all", &mut book, &config);
    assert_eq!(all, "Address book is empty.");
}

/// Changing a phone replaces exactly the matched entry.
#[test]
fn test_change_phone_flow() {
    let config = Config::default();
    let mut book = AddressBook::new();

    reply("add Alice 1234567890", &mut book, &config);
    reply("add Alice 0987654321", &mut book, &config);

    let changed = reply("change Alice 1234567890 5555555555", &mut book, &config);
    assert_eq!(changed, "Phone updated for Alice.");

    let phones = reply("phone Alice", &mut book, &config);
    assert_eq!(phones, "Alice: 5555555555, 0987654321");

    let missing = reply("change Alice 1111111111 2222222222", &mut book, &config);
    assert_eq!(missing, "Error: Phone number not found: 1111111111");
}

/// Lookups against absent contacts answer through the normal reply path.
#[test]
fn test_missing_contact_replies() {
    let config = Config::default();
    let mut book = AddressBook::new();

    assert_eq!(
        reply("show-birthday Carol", &mut book, &config),
        "Birthday not found."
    );
    assert_eq!(
        reply("phone Carol", &mut book, &config),
        "Error: Contact not found: Carol"
    );
    assert_eq!(
        reply("change Carol 1234567890 5555555555", &mut book, &config),
        "Error: Contact not found: Carol"
    );
    assert_eq!(
        reply("add-birthday Carol 01.01.2020", &mut book, &config),
        "Error: Contact not found: Carol"
    );
}

/// Deleting removes the record; deleting again reports the lookup error.
#[test]
fn test_delete_flow() {
    let config = Config::default();
    let mut book = AddressBook::new();

    reply("add Alice 1234567890", &mut book, &config);
    assert_eq!(reply("delete Alice", &mut book, &config), "Contact Alice deleted.");
    assert!(book.is_empty());
    assert_eq!(
        reply("delete Alice", &mut book, &config),
        "Error: Contact not found: Alice"
    );
}

/// Argument-count checks answer with usage lines before touching the book.
#[test]
fn test_usage_messages() {
    let config = Config::default();
    let mut book = AddressBook::new();

    assert_eq!(
        reply("add", &mut book, &config),
        "Error: Not enough arguments. Usage: add <name> <phone>"
    );
    assert_eq!(
        reply("change Alice", &mut book, &config),
        "Error: Not enough arguments. Usage: change <name> <old_phone> <new_phone>"
    );
    assert_eq!(
        reply("phone", &mut book, &config),
        "Error: Not enough arguments. Usage: phone <name>"
    );
    assert_eq!(
        reply("add-birthday Alice", &mut book, &config),
        "Error: Not enough arguments. Usage: add-birthday <name> <DD.MM.YYYY>"
    );
    assert!(book.is_empty());
}

/// A malformed or future birthday is rejected with a validation reply.
#[test]
fn test_birthday_validation_replies() {
    let config = Config::default();
    let mut book = AddressBook::new();
    reply("add Alice 1234567890", &mut book, &config);

    let malformed = reply("add-birthday Alice 2020-01-01", &mut book, &config);
    assert_eq!(
        malformed,
        "Error: Birthday must be in format DD.MM.YYYY, got: 2020-01-01"
    );

    let future = reply("add-birthday Alice 01.01.2999", &mut book, &config);
    assert_eq!(future, "Error: Birthday cannot be in the future: 01.01.2999");

    assert!(book.find("Alice").unwrap().birthday().is_none());
}

/// A whole scripted session through the loop itself.
#[test]
fn test_full_session_over_the_loop() {
    let input = "hello\n\
                 add Alice 1234567890\n\
                 add-birthday Alice 01.01.2020\n\
                 all\n\
                 unknown-command\n\
                 close\n";
    let mut output = Vec::new();
    contact_assistant::repl::run_with(Cursor::new(input), &mut output, &Config::default())
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with("Welcome to the assistant bot!"));
    assert!(output.contains("How can I help you?"));
    assert!(output.contains("Contact Alice added/updated with phone 1234567890."));
    assert!(output.contains("Contact name: Alice, phones: 1234567890, birthday: 01.01.2020"));
    assert!(output.contains("Invalid command."));
    assert!(output.ends_with("Good bye!\n"));
}
