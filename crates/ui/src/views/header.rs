use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::CircularProgress;
use crate::views::state::{SAVE_NOTICE_MS, SaveState, ViewError, use_workbook};
use crate::vm::ProgressVm;

#[component]
pub fn AppHeader(execution: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let workbook = use_workbook();
    let mut save_state = use_signal(|| SaveState::Idle);

    let vm = ProgressVm::new(&workbook.read().progress(), None);

    let save = move |_: MouseEvent| {
        if save_state() == SaveState::Saving {
            return;
        }
        let store = ctx.plan_store();
        let plan = workbook.read().plan().clone();
        spawn(async move {
            save_state.set(SaveState::Saving);
            match store.save(&plan).await {
                Ok(()) => {
                    save_state.set(SaveState::Saved);
                    spawn(async move {
                        tokio::time::sleep(Duration::from_millis(SAVE_NOTICE_MS)).await;
                        if save_state() == SaveState::Saved {
                            save_state.set(SaveState::Idle);
                        }
                    });
                }
                Err(err) => {
                    tracing::error!(error = %err, "saving plan failed");
                    save_state.set(SaveState::Error(ViewError::Unknown));
                }
            }
        });
    };

    rsx! {
        header { class: "app-header no-print",
            div { class: "app-header__brand",
                div { class: "app-header__logo", "B" }
                div {
                    h1 { class: "app-header__title", "The 2026 Blueprint" }
                    p { class: "app-header__subtitle", "Interactive Workbook" }
                }
            }

            div { class: "app-header__actions",
                div { class: "app-header__progress",
                    span { class: "app-header__ready", "{vm.ready_label}" }
                    CircularProgress { percent: vm.total, label: vm.ring_label.clone() }
                }
                button {
                    class: if execution { "btn btn--mode btn--active" } else { "btn btn--mode" },
                    r#type: "button",
                    onclick: move |_| {
                        if execution {
                            navigator.push(Route::Workbook {});
                        } else {
                            navigator.push(Route::Execution {});
                        }
                    },
                    if execution { "Exit Mode" } else { "Execution Mode" }
                }
                button {
                    class: "btn btn--primary",
                    r#type: "button",
                    disabled: save_state() == SaveState::Saving,
                    onclick: save,
                    "Save"
                }
                button {
                    class: "btn",
                    r#type: "button",
                    title: "Print or save as PDF",
                    onclick: move |_| {
                        let _ = eval("window.print();");
                    },
                    "PDF"
                }
            }
        }

        if save_state() == SaveState::Saved {
            div { class: "toast no-print", role: "status", "Progress saved successfully!" }
        }
        if let SaveState::Error(err) = save_state() {
            div { class: "toast toast--error no-print", role: "alert", "{err.message()}" }
        }
    }
}
