use std::sync::Arc;

use blueprint_core::model::Plan;
use storage::repository::EntryRepository;

use crate::error::PlanStoreError;

/// The single key the whole plan is persisted under.
pub const PLAN_STORAGE_KEY: &str = "2026BlueprintData";

/// Where a loaded plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    /// Nothing was stored; the plan is the default.
    Default,
    /// The stored entry parsed and replaced the default.
    Stored,
    /// An entry existed but could not be parsed; the plan is the default.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPlan {
    pub plan: Plan,
    pub source: PlanSource,
}

impl LoadedPlan {
    fn fresh(source: PlanSource) -> Self {
        Self {
            plan: Plan::default(),
            source,
        }
    }
}

/// Saves, loads and clears the persisted plan.
#[derive(Clone)]
pub struct PlanStore {
    entries: Arc<dyn EntryRepository>,
}

impl PlanStore {
    #[must_use]
    pub fn new(entries: Arc<dyn EntryRepository>) -> Self {
        Self { entries }
    }

    /// Load the stored plan, falling back to the default when nothing is
    /// stored or the stored entry is unreadable.
    ///
    /// # Errors
    ///
    /// Returns `PlanStoreError::Storage` only if the backend itself fails.
    pub async fn load(&self) -> Result<LoadedPlan, PlanStoreError> {
        let Some(raw) = self.entries.get_entry(PLAN_STORAGE_KEY).await? else {
            tracing::debug!("no saved plan; starting from defaults");
            return Ok(LoadedPlan::fresh(PlanSource::Default));
        };

        match decode_plan(&raw) {
            Ok(plan) => {
                tracing::debug!(bytes = raw.len(), "loaded saved plan");
                Ok(LoadedPlan {
                    plan,
                    source: PlanSource::Stored,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "saved plan is unreadable; using defaults");
                Ok(LoadedPlan::fresh(PlanSource::Discarded))
            }
        }
    }

    /// Persist the whole plan, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns `PlanStoreError` if encoding or the write fails; the previous
    /// entry is left intact in that case.
    pub async fn save(&self, plan: &Plan) -> Result<(), PlanStoreError> {
        let raw = encode_plan(plan)?;
        self.entries.put_entry(PLAN_STORAGE_KEY, &raw).await?;
        tracing::info!(bytes = raw.len(), "plan saved");
        Ok(())
    }

    /// Remove the stored plan and hand back the default plan to continue with.
    ///
    /// # Errors
    ///
    /// Returns `PlanStoreError::Storage` if the entry could not be removed, in
    /// which case callers must keep their current plan.
    pub async fn clear(&self) -> Result<Plan, PlanStoreError> {
        self.entries.remove_entry(PLAN_STORAGE_KEY).await?;
        tracing::info!("saved plan cleared");
        Ok(Plan::default())
    }
}

/// Encode a plan in its persisted JSON form.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn encode_plan(plan: &Plan) -> Result<String, serde_json::Error> {
    serde_json::to_string(plan)
}

/// Decode a plan from its persisted JSON form.
///
/// # Errors
///
/// Returns `serde_json::Error` for malformed JSON or any shape mismatch.
pub fn decode_plan(raw: &str) -> Result<Plan, serde_json::Error> {
    serde_json::from_str(raw)
}
