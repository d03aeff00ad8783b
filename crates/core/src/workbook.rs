use crate::model::{Plan, PlanEdit};
use crate::progress::Progress;

/// Single owner of the in-memory plan and the progress derived from it.
///
/// Every change replaces the plan with a new value and rescored progress, so a
/// reader never observes a plan whose progress is stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    plan: Plan,
    progress: Progress,
}

impl Default for Workbook {
    fn default() -> Self {
        Self::from_plan(Plan::default())
    }
}

impl Workbook {
    #[must_use]
    pub fn from_plan(plan: Plan) -> Self {
        let progress = Progress::of(&plan);
        Self { plan, progress }
    }

    #[must_use]
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn apply(&mut self, edit: PlanEdit) {
        self.replace(self.plan.apply(edit));
    }

    /// Swap in a whole plan, e.g. one just loaded from storage.
    pub fn replace(&mut self, plan: Plan) {
        self.progress = Progress::of(&plan);
        self.plan = plan;
    }

    /// Back to a fresh default plan.
    pub fn reset(&mut self) {
        self.replace(Plan::default());
    }
}
