//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{CommandError, CommandResult};
use std::fmt;

/// A contact record: one name, any number of phones, an optional birthday.
///
/// The name is fixed at construction and serves as the address book key.
/// Phones keep insertion order and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Get the contact name as a string slice.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Get the birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate `phone` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not a
    /// 10-digit string.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.push_phone(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Append an already-validated phone number.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replace the first phone entry equal to `old` with a newly
    /// validated phone built from `new`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if no entry matches `old`,
    /// or a validation error if `new` is not a 10-digit string.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| CommandError::PhoneNotFound(old.to_string()))?;
        *slot = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Validate `value` and set it as the birthday, overwriting any
    /// existing one.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// The comma-joined phone list, or a placeholder when empty.
    pub fn phone_list(&self) -> String {
        if self.phones.is_empty() {
            return "no phones".to_string();
        }
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = match &self.birthday {
            Some(b) => b.to_string(),
            None => "not set".to_string(),
        };
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.phone_list(),
            birthday
        )
    }
}
