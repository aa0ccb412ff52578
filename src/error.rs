//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can raise.
///
/// Both variants are caught at the dispatch boundary and rendered as a
/// one-line `Error: ...` response; they never escape the command loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field value failed validation (bad phone digits, unparseable date)
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// The command was given fewer positional arguments than it requires
    #[error("Not enough arguments provided.")]
    MissingArguments,
}

/// Errors that can occur while reading or writing the snapshot file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Snapshot file exists but could not be read
    #[error("Failed to read snapshot at {path}: {reason}")]
    Read { path: String, reason: String },

    /// Snapshot file could not be written
    #[error("Failed to write snapshot at {path}: {reason}")]
    Write { path: String, reason: String },

    /// Snapshot file contents did not parse as a contact book
    #[error("Malformed snapshot at {path}: {reason}")]
    Malformed { path: String, reason: String },
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

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::MissingArguments;
        assert_eq!(err.to_string(), "Not enough arguments provided.");

        let err = CommandError::from(ValidationError::InvalidPhone("123".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid phone number format. Only 10 digits are allowed."
        );

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a positive number, got: soon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a positive number, got: soon"
        );
    }

    #[test]
    fn test_storage_error_carries_path() {
        let err = StorageError::Malformed {
            path: "addressbook.json".to_string(),
            reason: "expected value".to_string(),
        };
        assert!(err.to_string().contains("addressbook.json"));
    }
}
