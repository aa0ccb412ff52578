//! AddressBook model: the keyed collection of records for one session.

use crate::models::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default window, in days, for the upcoming-birthdays query.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// The full collection of contact records, keyed by exact name.
///
/// Names match case-sensitively with no trimming or folding. Iteration is
/// insertion order, and re-adding an existing name replaces the record in
/// place without moving it. Backed by a `Vec` with linear lookup; books are
/// interactive-session sized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressBook {
    /// Records in insertion order.
    #[serde(default, rename = "contacts")]
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, or replace the record already stored under its name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(&record.name) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Exact-match lookup by name, mutable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.position(name) {
            Some(index) => Some(&mut self.records[index]),
            None => None,
        }
    }

    /// Iterate records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within `window_days` of `today`.
    ///
    /// Includes `(name, days)` pairs with `0 < days <= window_days`; a
    /// birthday falling on `today` itself is excluded. Results keep the
    /// book's insertion order rather than sorting by proximity.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<(String, i64)> {
        self.records
            .iter()
            .filter_map(|record| {
                let days = record.days_to_birthday(today)?;
                (days > 0 && days <= window_days).then(|| (record.name.clone(), days))
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }
}
