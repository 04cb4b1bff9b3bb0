//! Command handlers.
//!
//! Each handler checks its own argument count first, then touches the
//! address book and produces the reply text. Failures surface as
//! [`CommandError`]s; the dispatcher turns them into `Error: …` lines.

use crate::book::AddressBook;
use crate::config::Config;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;

/// `hello`: fixed greeting, no state access.
pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: find-or-create the record for the name, then
/// append the phone.
///
/// The phone is validated before the book is touched, so a rejected
/// phone never leaves an empty record behind.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    if args.len() < 2 {
        return Err(CommandError::Usage("add <name> <phone>"));
    }
    let (name, phone) = (args[0], args[1]);

    let phone = PhoneNumber::new(phone)?;
    let reply = format!("Contact {} added/updated with phone {}.", name, phone);
    match book.find_mut(name) {
        Some(record) => record.push_phone(phone),
        None => {
            let mut record = Record::new(ContactName::new(name)?);
            record.push_phone(phone);
            book.add_record(record);
        }
    }
    Ok(reply)
}

/// `change <name> <old_phone> <new_phone>`: replace one phone entry.
pub fn change_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    if args.len() < 3 {
        return Err(CommandError::Usage("change <name> <old_phone> <new_phone>"));
    }
    let (name, old, new) = (args[0], args[1], args[2]);

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old, new)?;
    Ok(format!("Phone updated for {}.", name))
}

/// `phone <name>`: report the record's phone list.
pub fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    if args.is_empty() {
        return Err(CommandError::Usage("phone <name>"));
    }
    let name = args[0];

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    if record.phones().is_empty() {
        return Ok(format!("{} has no phones on record.", name));
    }
    Ok(format!("{}: {}", name, record.phone_list()))
}

/// `add-birthday <name> <DD.MM.YYYY>`: set the record's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    if args.len() < 2 {
        return Err(CommandError::Usage("add-birthday <name> <DD.MM.YYYY>"));
    }
    let (name, birthday) = (args[0], args[1]);

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.set_birthday(birthday)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`: report the record's birthday.
///
/// An absent contact or an unset birthday both answer with the same
/// plain line; this is the normal reply path, not an error.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    if args.is_empty() {
        return Err(CommandError::Usage("show-birthday <name>"));
    }
    let name = args[0];

    match book.find(name).and_then(|r| r.birthday()) {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok("Birthday not found.".to_string()),
    }
}

/// `delete <name>`: remove the record from the book.
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    if args.is_empty() {
        return Err(CommandError::Usage("delete <name>"));
    }
    let name = args[0];

    book.delete(name)?;
    Ok(format!("Contact {} deleted.", name))
}

/// `all`: render the whole book.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    Ok(book.to_string())
}

/// `birthdays`: birthdays in the configured upcoming window, one
/// `name: date` line per entry in book order.
pub fn upcoming_birthdays(book: &AddressBook, config: &Config) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(config.birthday_window_days)?;
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
