//! Contact Assistant - an interactive command-line manager for contact
//! names, phone numbers, and birthdays.
//!
//! All state lives in an in-memory address book for the lifetime of the
//! process; commands arrive one per line on stdin and answer with
//! human-readable text on stdout.
//!
//! # Architecture
//!
//! - **domain**: validated field value types (name, phone, birthday)
//! - **models**: the per-contact `Record` aggregate
//! - **book**: the `AddressBook` collection and its birthday-window query
//! - **commands**: keyword parsing, handlers, and error-to-reply translation
//! - **repl**: the interactive line loop
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{dispatch, Command, Dispatch};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::Record;
