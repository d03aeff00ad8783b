#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod plan_store;

pub use app_services::AppServices;
pub use error::{AppServicesError, PlanStoreError};
pub use plan_store::{LoadedPlan, PLAN_STORAGE_KEY, PlanSource, PlanStore};
