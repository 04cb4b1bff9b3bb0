//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Local, NaiveDate};
use std::fmt;

/// The fixed textual format for birthdays, both on input and display.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// The input string must parse as `DD.MM.YYYY` and must not lie in the
/// future relative to the current date. The parsed calendar date is
/// stored; display uses the same canonical format.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("01.01.2020").unwrap();
/// assert_eq!(birthday.to_string(), "01.01.2020");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, parsing and validating the date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value does not
    /// parse as `DD.MM.YYYY`, or `ValidationError::FutureBirthday` if the
    /// parsed date is after today.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))?;

        if date > Local::now().date_naive() {
            return Err(ValidationError::FutureBirthday(value.to_string()));
        }

        Ok(Self(date))
    }

    /// Get the stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
