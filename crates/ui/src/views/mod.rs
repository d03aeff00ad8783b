mod components;
mod execution;
mod guide;
mod header;
mod modules;
mod state;
mod workbook;

pub use execution::ExecutionView;
pub use header::AppHeader;
pub use state::{ResetState, SAVE_NOTICE_MS, SaveState, ViewError, use_plan_loader, use_workbook};
pub use workbook::WorkbookView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
