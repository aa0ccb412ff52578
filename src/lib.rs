//! Contact Book - an interactive command-line assistant for managing
//! contacts, phone numbers, and birthdays.
//!
//! The assistant reads one command per line, mutates a single in-memory
//! address book, and persists the whole book as a JSON snapshot between
//! runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays)
//! - **models**: Records and the address book collection
//! - **storage**: Whole-book JSON snapshot persistence
//! - **repl**: Command parsing, dispatch table, and the interactive loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

// Re-export commonly used types
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use repl::{dispatch, Outcome, Session};
