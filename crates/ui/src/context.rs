use std::sync::Arc;

use services::PlanStore;

pub trait UiApp: Send + Sync {
    fn plan_store(&self) -> Arc<PlanStore>;
}

#[derive(Clone)]
pub struct AppContext {
    plan_store: Arc<PlanStore>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            plan_store: app.plan_store(),
        }
    }

    #[must_use]
    pub fn plan_store(&self) -> Arc<PlanStore> {
        Arc::clone(&self.plan_store)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
