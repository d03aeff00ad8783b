mod audit;
mod leverage;
mod scorecard;
mod systems;
mod vision;

pub use audit::AuditSection;
pub use leverage::LeverageSection;
pub use scorecard::ScorecardSection;
pub use systems::SystemsSection;
pub use vision::VisionSection;
pub(crate) use systems::REVIEW_LABELS;
