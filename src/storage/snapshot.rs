//! Whole-book JSON snapshot persistence.
//!
//! The snapshot is an explicit, stable layout — a `contacts` array of
//! records — rather than an opaque object dump, so it stays readable and
//! portable across versions.

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Load the address book from `path`.
///
/// A missing file is not an error: it is the defined initialization path
/// and yields an empty book. Unreadable or malformed snapshots are errors,
/// so a damaged file is never silently replaced by the next save.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("no snapshot at {}, starting with an empty book", path.display());
            return Ok(AddressBook::new());
        }
        Err(e) => {
            return Err(StorageError::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        }
    };

    let book: AddressBook =
        serde_json::from_str(&contents).map_err(|e| StorageError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    info!(contacts = book.len(), "loaded snapshot from {}", path.display());
    Ok(book)
}

/// Save the entire address book to `path` as pretty-printed JSON.
pub fn save(path: &Path, book: &AddressBook) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(book).map_err(|e| StorageError::Write {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    fs::write(path, json).map_err(|e| StorageError::Write {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    info!(contacts = book.len(), "saved snapshot to {}", path.display());
    Ok(())
}
