//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `PlanStore`.
///
/// Malformed stored data is never reported here; loading falls back to the
/// default plan instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlanStoreError {
    #[error("could not encode plan: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
