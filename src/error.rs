//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a user command.
///
/// Every variant is caught at the dispatch boundary and rendered as an
/// `Error: …` reply line; none propagates out of the command layer.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field value failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The named contact does not exist in the address book
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The phone number to edit is not on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// Too few arguments were supplied to the command
    #[error("Not enough arguments. Usage: {0}")]
    Usage(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::ContactNotFound("Carol".to_string());
        assert_eq!(err.to_string(), "Contact not found: Carol");

        let err = CommandError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 0501234567");

        let err = CommandError::Usage("add <name> <phone>");
        assert_eq!(err.to_string(), "Not enough arguments. Usage: add <name> <phone>");

        let err = ConfigError::InvalidValue {
            var: "ASSISTANT_BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert!(err.to_string().contains("ASSISTANT_BIRTHDAY_WINDOW_DAYS"));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: CommandError = ValidationError::InvalidPhone("12345".to_string()).into();
        assert_eq!(err.to_string(), "Phone number must be 10 digits, got: 12345");
    }
}
