#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{EntryRepository, InMemoryRepository, Storage, StorageError};
