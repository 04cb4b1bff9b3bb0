//! Command parsing and dispatch.
//!
//! The first whitespace token of an input line is the case-insensitive
//! command keyword; the rest are positional arguments. [`dispatch`]
//! routes to the matching handler and applies the shared
//! error-translation contract: every handler failure becomes an
//! `Error: …` reply string, so the loop above only ever sees text to
//! print.

pub mod handlers;

use crate::book::AddressBook;
use crate::config::Config;
use std::str::FromStr;
use tracing::debug;

/// Command keywords understood by the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Change,
    Phone,
    AddBirthday,
    ShowBirthday,
    Delete,
    All,
    Birthdays,
    Hello,
    /// `close` or `exit`
    Exit,
    /// Anything else; answered with a fixed message, not an error
    Unknown,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "delete" => Ok(Command::Delete),
            "all" => Ok(Command::All),
            "birthdays" => Ok(Command::Birthdays),
            "hello" => Ok(Command::Hello),
            "close" | "exit" => Ok(Command::Exit),
            _ => Ok(Command::Unknown),
        }
    }
}

/// Outcome of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Text to print before the next prompt
    Reply(String),
    /// An exit keyword: the loop should terminate
    Exit,
}

/// Tokenize one input line and route it to the matching handler.
///
/// Blank input produces an empty reply; the loop filters blank lines
/// before calling here, so that path is defensive only.
pub fn dispatch(line: &str, book: &mut AddressBook, config: &Config) -> Dispatch {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Dispatch::Reply(String::new());
    };
    let args: Vec<&str> = tokens.collect();

    // The parse never fails; unknown keywords map to Command::Unknown.
    let command = keyword.parse::<Command>().unwrap_or(Command::Unknown);
    debug!(?command, args = args.len(), "dispatching command");

    let reply = match command {
        Command::Exit => return Dispatch::Exit,
        Command::Hello => Ok(handlers::hello()),
        Command::Add => handlers::add_contact(&args, book),
        Command::Change => handlers::change_phone(&args, book),
        Command::Phone => handlers::show_phones(&args, book),
        Command::AddBirthday => handlers::add_birthday(&args, book),
        Command::ShowBirthday => handlers::show_birthday(&args, book),
        Command::Delete => handlers::delete_contact(&args, book),
        Command::All => handlers::show_all(book),
        Command::Birthdays => handlers::upcoming_birthdays(book, config),
        Command::Unknown => Ok("Invalid command.".to_string()),
    };

    Dispatch::Reply(reply.unwrap_or_else(|e| format!("Error: {}", e)))
}
