//! Data models for the contact book.

pub mod book;
pub mod record;

pub use book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
