//! Record model representing a single contact in the book.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is the record's identity inside an [`AddressBook`] and never
/// changes after creation. Phones keep insertion order and may repeat;
/// the birthday may be overwritten by a later `add-birthday`.
///
/// [`AddressBook`]: crate::models::AddressBook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Contact name, the lookup key.
    pub name: String,

    /// Phone numbers in the order they were added.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneNumber>,

    /// Birthday, if one has been set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given name, no phones, no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// Duplicates are allowed; the list is not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for anything that is not
    /// exactly 10 decimal digits. The record is unchanged on error.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with a validated `new` number.
    ///
    /// Returns `Ok(true)` when a replacement happened and `Ok(false)` when
    /// no phone matched `old`. The record is unchanged unless `Ok(true)`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is not a valid
    /// phone string; `old` is only compared, never validated.
    pub fn replace_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = PhoneNumber::new(new)?;
        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(index) => {
                self.phones[index] = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Validate `raw` as `DD.MM.YYYY` and set it as the birthday.
    ///
    /// Re-setting overwrites any previous birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for malformed or impossible
    /// dates. The record is unchanged on error.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::parse(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days from `today` to the next occurrence of this record's birthday.
    ///
    /// Returns `None` when no birthday is set; otherwise a value in
    /// `0..366`, with `0` meaning the birthday is today.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("Anna");
        assert_eq!(record.name, "Anna");
        assert!(record.phones.is_empty());
        assert!(record.birthday.is_none());
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let mut record = Record::new("Anna");
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();

        let phones: Vec<&str> = record.phones.iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1234567890", "0987654321"]);
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::new("Anna");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones.len(), 2);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut record = Record::new("Anna");
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
        assert!(record.phones.is_empty());
    }

    #[test]
    fn test_replace_phone_swaps_first_match_only() {
        let mut record = Record::new("Anna");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();

        assert!(record.replace_phone("1234567890", "0987654321").unwrap());

        let phones: Vec<&str> = record.phones.iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["0987654321", "1234567890"]);
    }

    #[test]
    fn test_replace_phone_missing_old_returns_false() {
        let mut record = Record::new("Anna");
        record.add_phone("1234567890").unwrap();

        assert!(!record.replace_phone("1111111111", "0987654321").unwrap());
        assert_eq!(record.phones[0].as_str(), "1234567890");
    }

    #[test]
    fn test_replace_phone_invalid_new_is_rejected() {
        let mut record = Record::new("Anna");
        record.add_phone("1234567890").unwrap();

        assert!(record.replace_phone("1234567890", "bad").is_err());
        assert_eq!(record.phones[0].as_str(), "1234567890");
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut record = Record::new("Anna");
        record.set_birthday("15.05.1990").unwrap();
        record.set_birthday("16.06.1991").unwrap();
        assert_eq!(record.birthday.unwrap().to_string(), "16.06.1991");
    }

    #[test]
    fn test_days_to_birthday_none_without_birthday() {
        let record = Record::new("Anna");
        assert_eq!(record.days_to_birthday(date(2024, 5, 10)), None);
    }

    #[test]
    fn test_days_to_birthday_counts_from_today() {
        let mut record = Record::new("Anna");
        record.set_birthday("15.05.1990").unwrap();
        assert_eq!(record.days_to_birthday(date(2024, 5, 10)), Some(5));
    }

    #[test]
    fn test_record_serialization_omits_empty_fields() {
        let record = Record::new("Anna");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, "{\"name\":\"Anna\"}");
    }

    #[test]
    fn test_record_deserialization_defaults_missing_fields() {
        let record: Record = serde_json::from_str("{\"name\":\"Anna\"}").unwrap();
        assert_eq!(record, Record::new("Anna"));
    }
}
