use blueprint_core::Workbook;
use blueprint_core::model::PlanEdit;
use dioxus::prelude::*;

use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        "Something went wrong. Please try again."
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Saved,
    Error(ViewError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetState {
    Idle,
    Resetting,
    Error(ViewError),
}

/// How long the save confirmation stays on screen.
pub const SAVE_NOTICE_MS: u64 = 2_000;

/// Provide the shared workbook to descendants and hydrate it from storage once.
///
/// Returns a signal that holds an error if the backend could not be read.
/// Unreadable saved data is not an error; the workbook simply stays default.
pub fn use_plan_loader() -> Signal<Option<ViewError>> {
    let ctx = use_context::<AppContext>();
    let mut workbook = use_context_provider(|| Signal::new(Workbook::default()));
    let mut load_error = use_signal(|| None::<ViewError>);

    let _ = use_resource(move || {
        let store = ctx.plan_store();
        async move {
            match store.load().await {
                Ok(loaded) => {
                    tracing::debug!(source = ?loaded.source, "workbook hydrated");
                    workbook.set(Workbook::from_plan(loaded.plan));
                }
                Err(err) => {
                    tracing::error!(error = %err, "could not read saved plan");
                    load_error.set(Some(ViewError::Unknown));
                }
            }
        }
    });

    load_error
}

#[must_use]
pub fn use_workbook() -> Signal<Workbook> {
    use_context::<Signal<Workbook>>()
}

/// Route a user change through the workbook's single mutation entry point.
pub fn edit(mut workbook: Signal<Workbook>, change: PlanEdit) {
    workbook.write().apply(change);
}
