mod audit;
mod edit;
mod friend;
mod plan;

pub use audit::{AuditAction, AuditEntry, Energy};
pub use edit::PlanEdit;
pub use friend::{Friend, FriendEnergy, FriendTrait};
pub use plan::{DEFAULT_AUDIT_SLOTS, Flag, POWER_GOAL_COUNT, Plan, REVIEW_COUNT, TextField};
