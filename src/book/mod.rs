//! The in-memory address book.
//!
//! A name-keyed collection of [`Record`]s with lookup, insertion,
//! deletion, and the upcoming-birthday window query. Iteration order is
//! insertion order; lookups are exact-match linear scans over a
//! collection bounded by interactive input.

use crate::domain::{ValidationError, BIRTHDAY_FORMAT};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::fmt;

/// One entry in the upcoming-birthday report.
///
/// `date` is the congratulation date: the birthday transplanted into the
/// current year, shifted to the following Monday when it lands on a
/// weekend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name the entry belongs to
    pub name: String,

    /// The date to congratulate on
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// The process-lifetime collection of contact records, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Insert a record, or overwrite the existing record with the same
    /// name in place.
    ///
    /// No merge happens on overwrite: the previous record's phones and
    /// birthday are lost. Callers wanting find-or-create semantics look
    /// the name up first.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Find a record by exact name match.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Find a record by exact name match, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove and return the record for an exact name match.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::ContactNotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> CommandResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// Birthdays falling within `window_days` days from today, inclusive.
    ///
    /// See [`AddressBook::upcoming_birthdays_on`] for the exact window
    /// and weekend-shift semantics.
    pub fn upcoming_birthdays(
        &self,
        window_days: i64,
    ) -> Result<Vec<UpcomingBirthday>, ValidationError> {
        self.upcoming_birthdays_on(Local::now().date_naive(), window_days)
    }

    /// Birthdays falling within `today ..= today + window_days`, against
    /// an explicit `today`.
    ///
    /// Each stored birthday is transplanted into `today`'s year; entries
    /// outside the inclusive window are skipped. A congratulation date
    /// landing on Saturday or Sunday is advanced to the following Monday.
    /// Results keep the book's insertion order, not chronological order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonexistentDate` when a birthday's
    /// day/month does not exist in `today`'s year (February 29 outside
    /// leap years). The query does not special-case leap-day birthdays.
    pub fn upcoming_birthdays_on(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Result<Vec<UpcomingBirthday>, ValidationError> {
        let window_end = today + Duration::days(window_days);
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let date = birthday.date();
            let birthday_this_year =
                date.with_year(today.year())
                    .ok_or(ValidationError::NonexistentDate {
                        day: date.day(),
                        month: date.month(),
                        year: today.year(),
                    })?;

            if birthday_this_year < today || birthday_this_year > window_end {
                continue;
            }

            upcoming.push(UpcomingBirthday {
                name: record.name().to_string(),
                date: shift_weekend_to_monday(birthday_this_year),
            });
        }

        Ok(upcoming)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

/// Congratulation dates on Saturday or Sunday move to the following
/// Monday: advance by `7 - weekday_index` days, indices 0=Monday…6=Sunday.
fn shift_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    if weekday >= 5 {
        date + Duration::days(7 - weekday)
    } else {
        date
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "Address book is empty.");
        }
        let lines = self
            .records
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}
