//! Command handlers for the interactive loop.
//!
//! Each handler receives its arguments already arity-checked by the
//! dispatch table and returns the one-line response to print. Lookup
//! misses are plain responses, not errors; only validation failures and
//! missing arguments travel as `CommandError`.

use super::Session;
use crate::error::CommandResult;
use crate::models::Record;
use chrono::NaiveDate;

pub(super) fn hello(_args: &[&str], _session: &mut Session, _today: NaiveDate) -> CommandResult<String> {
    Ok("How can I help you?".to_string())
}

/// `add <name> <phone>` — create the record if absent, append the phone.
pub(super) fn add_contact(args: &[&str], session: &mut Session, _today: NaiveDate) -> CommandResult<String> {
    let (name, phone) = (args[0], args[1]);
    match session.book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            // A rejected phone must not leave a half-created record behind.
            let mut record = Record::new(name);
            record.add_phone(phone)?;
            session.book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <old> <new>` — replace the first phone equal to `old`.
pub(super) fn change_phone(args: &[&str], session: &mut Session, _today: NaiveDate) -> CommandResult<String> {
    let (name, old, new) = (args[0], args[1], args[2]);
    match session.book.find_mut(name) {
        Some(record) => {
            if record.replace_phone(old, new)? {
                Ok(format!("Phone number for {} updated.", name))
            } else {
                Ok(format!("Phone number {} not found for {}.", old, name))
            }
        }
        None => Ok(format!("Contact {} not found.", name)),
    }
}

/// `phone <name>` — list the contact's phones.
pub(super) fn show_phones(args: &[&str], session: &mut Session, _today: NaiveDate) -> CommandResult<String> {
    let name = args[0];
    match session.book.find(name) {
        Some(record) => {
            let phones: Vec<&str> = record.phones.iter().map(|p| p.as_str()).collect();
            Ok(format!("Phones for {}: {}", name, phones.join(", ")))
        }
        None => Ok(format!("Contact {} not found.", name)),
    }
}

/// `all` — one line per contact, in insertion order.
pub(super) fn show_all(_args: &[&str], session: &mut Session, _today: NaiveDate) -> CommandResult<String> {
    if session.book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }

    let lines: Vec<String> = session
        .book
        .records()
        .map(|record| {
            let phones: Vec<&str> = record.phones.iter().map(|p| p.as_str()).collect();
            let birthday = record
                .birthday
                .map(|b| b.to_string())
                .unwrap_or_else(|| "No birthday".to_string());
            format!(
                "{}: Phones: {}; Birthday: {}",
                record.name,
                phones.join(", "),
                birthday
            )
        })
        .collect();

    Ok(lines.join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>` — set (or overwrite) the birthday.
pub(super) fn add_birthday(args: &[&str], session: &mut Session, _today: NaiveDate) -> CommandResult<String> {
    let (name, date) = (args[0], args[1]);
    match session.book.find_mut(name) {
        Some(record) => {
            record.set_birthday(date)?;
            Ok(format!("Birthday for {} added.", name))
        }
        None => Ok(format!("Contact {} not found.", name)),
    }
}

/// `show-birthday <name>` — print the stored birthday.
pub(super) fn show_birthday(args: &[&str], session: &mut Session, _today: NaiveDate) -> CommandResult<String> {
    let name = args[0];
    match session.book.find(name).and_then(|r| r.birthday) {
        Some(birthday) => Ok(format!("{}'s birthday is on {}.", name, birthday)),
        None => Ok(format!("Birthday for {} not found.", name)),
    }
}

/// `birthdays` — contacts with a birthday inside the configured window.
pub(super) fn birthdays(_args: &[&str], session: &mut Session, today: NaiveDate) -> CommandResult<String> {
    let upcoming = session
        .book
        .upcoming_birthdays(today, session.birthday_window_days);

    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next week.".to_string());
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|(name, days)| format!("{} has a birthday in {} days", name, days))
        .collect();

    Ok(lines.join("\n"))
}
