use blueprint_core::Module;
use dioxus::document::eval;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::ProgressBar;
use crate::views::guide::Guide;
use crate::views::modules::{
    AuditSection, LeverageSection, ScorecardSection, SystemsSection, VisionSection,
};
use crate::views::state::{ResetState, ViewError, use_workbook};
use crate::vm::ProgressVm;

/// Tabbed workbook. Every section stays mounted so printing includes all of them.
#[component]
pub fn WorkbookView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut workbook = use_workbook();
    let mut active = use_signal(|| Module::Vision);
    let mut show_reset_modal = use_signal(|| false);
    let mut reset_state = use_signal(|| ResetState::Idle);

    let vm = ProgressVm::new(&workbook.read().progress(), Some(active()));
    let next = active().next();
    let panel_class = move |module: Module| {
        if active() == module {
            "module-panel"
        } else {
            "module-panel module-panel--hidden"
        }
    };

    rsx! {
        div { class: "workbook",
            nav { class: "tabs no-print",
                for tab in vm.tabs {
                    button {
                        key: "{tab.module.id()}",
                        class: if tab.active { "tab tab--active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| active.set(tab.module),
                        span { class: "tab__label", "{tab.label}" }
                        ProgressBar { percent: tab.percent }
                    }
                }
            }

            div { class: "sheet",
                div { class: panel_class(Module::Vision), VisionSection {} }
                div { class: panel_class(Module::Audit), AuditSection {} }
                div { class: panel_class(Module::Systems), SystemsSection {} }
                div { class: panel_class(Module::Leverage), LeverageSection {} }
                div { class: panel_class(Module::Scorecard), ScorecardSection {} }

                div { class: "sheet__footer no-print",
                    button {
                        class: "link-button link-button--danger",
                        r#type: "button",
                        onclick: move |_| show_reset_modal.set(true),
                        "Reset All Data"
                    }
                    if let Some(module) = next {
                        button {
                            class: "btn btn--primary",
                            r#type: "button",
                            onclick: move |_| {
                                active.set(module);
                                let _ = eval("window.scrollTo(0, 0);");
                            },
                            "Next Step"
                        }
                    }
                }
            }

            Guide {}

            if show_reset_modal() {
                div {
                    class: "modal-overlay no-print",
                    onclick: move |_| {
                        show_reset_modal.set(false);
                        reset_state.set(ResetState::Idle);
                    },
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "Reset all data?" }
                        p { class: "modal-body",
                            "Are you sure you want to clear all data? This cannot be undone."
                        }
                        if let ResetState::Error(err) = reset_state() {
                            p { class: "modal-error", "{err.message()}" }
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn",
                                r#type: "button",
                                onclick: move |_| {
                                    show_reset_modal.set(false);
                                    reset_state.set(ResetState::Idle);
                                },
                                "Cancel"
                            }
                            button {
                                class: "btn btn--danger",
                                r#type: "button",
                                disabled: reset_state() == ResetState::Resetting,
                                onclick: move |_| {
                                    let store = ctx.plan_store();
                                    spawn(async move {
                                        reset_state.set(ResetState::Resetting);
                                        match store.clear().await {
                                            Ok(plan) => {
                                                workbook.write().replace(plan);
                                                active.set(Module::Vision);
                                                reset_state.set(ResetState::Idle);
                                                show_reset_modal.set(false);
                                            }
                                            Err(err) => {
                                                tracing::error!(error = %err, "clearing saved plan failed");
                                                reset_state.set(ResetState::Error(ViewError::Unknown));
                                            }
                                        }
                                    });
                                },
                                "Clear Everything"
                            }
                        }
                    }
                }
            }
        }
    }
}
