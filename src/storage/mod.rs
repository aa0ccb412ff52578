//! Snapshot persistence for the address book.

pub mod snapshot;
