//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or whitespace-only.
    EmptyName,

    /// The provided phone number is not exactly 10 decimal digits.
    InvalidPhone(String),

    /// The provided birthday string does not parse as `DD.MM.YYYY`.
    InvalidBirthday(String),

    /// The provided birthday lies in the future.
    FutureBirthday(String),

    /// The day/month pair does not exist in the given year
    /// (February 29 outside leap years).
    NonexistentDate { day: u32, month: u32, year: i32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must be 10 digits, got: {}", phone)
            }
            Self::InvalidBirthday(value) => {
                write!(f, "Birthday must be in format DD.MM.YYYY, got: {}", value)
            }
            Self::FutureBirthday(value) => {
                write!(f, "Birthday cannot be in the future: {}", value)
            }
            Self::NonexistentDate { day, month, year } => {
                write!(f, "Date {:02}.{:02} does not exist in year {}", day, month, year)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
