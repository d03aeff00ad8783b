use std::sync::Arc;

use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::plan_store::PlanStore;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    plan_store: Arc<PlanStore>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        let plan_store = Arc::new(PlanStore::new(Arc::clone(&storage.entries)));
        Self { plan_store }
    }

    #[must_use]
    pub fn plan_store(&self) -> Arc<PlanStore> {
        Arc::clone(&self.plan_store)
    }
}
