use blueprint_core::model::{Flag, PlanEdit, TextField};
use dioxus::prelude::*;

use crate::views::modules::REVIEW_LABELS;
use crate::views::state::{edit, use_workbook};

/// Single-column daily view: today's next step, tasks, habits and reviews.
#[component]
pub fn ExecutionView() -> Element {
    let workbook = use_workbook();
    let plan = workbook.read().plan().clone();
    let tasks: Vec<(usize, TextField, String)> = TextField::TASKS
        .into_iter()
        .enumerate()
        .map(|(index, field)| (index + 1, field, plan.text(field).to_string()))
        .collect();
    let reviews: Vec<(usize, &'static str, bool)> = REVIEW_LABELS
        .into_iter()
        .zip(plan.reviews())
        .enumerate()
        .map(|(index, (label, done))| (index, label, done))
        .collect();
    let morning_attack = plan.flag(Flag::MorningAttack);
    let sprints: Vec<(usize, Flag, bool)> = [Flag::Pomodoro1, Flag::Pomodoro2]
        .into_iter()
        .enumerate()
        .map(|(index, flag)| (index + 1, flag, plan.flag(flag)))
        .collect();

    rsx! {
        div { class: "execution",
            div { class: "execution__hero",
                h2 { "Execution Mode" }
                p { class: "execution__lede", "Focus on today's actions" }
                div { class: "execution__mins",
                    label { class: "execution__mins-label", "Daily MINS" }
                    textarea {
                        rows: "2",
                        value: "{plan.text(TextField::Mins)}",
                        placeholder: "What is the ONE thing you must do today?",
                        oninput: move |evt| edit(workbook, PlanEdit::SetText(TextField::Mins, evt.value())),
                    }
                }
            }

            div { class: "card",
                h3 { class: "card__title", "Today's Priority Tasks" }
                for (number, field, value) in tasks {
                    div { key: "{number}", class: "execution__task",
                        span { class: "execution__badge", "{number}" }
                        input {
                            class: "line-input",
                            r#type: "text",
                            value: "{value}",
                            placeholder: "Task...",
                            oninput: move |evt| edit(workbook, PlanEdit::SetText(field, evt.value())),
                        }
                    }
                }
            }

            div { class: "execution__habits",
                button {
                    class: if morning_attack { "habit habit--done" } else { "habit" },
                    r#type: "button",
                    onclick: move |_| edit(workbook, PlanEdit::ToggleFlag(Flag::MorningAttack)),
                    "90 Min Attack"
                }
                div { class: "card",
                    p { class: "execution__caption", "Pomodoros" }
                    div { class: "execution__sprints",
                        for (number, flag, done) in sprints {
                            button {
                                key: "{number}",
                                class: if done { "sprint sprint--done" } else { "sprint" },
                                r#type: "button",
                                onclick: move |_| edit(workbook, PlanEdit::ToggleFlag(flag)),
                                "{number}"
                            }
                        }
                    }
                }
            }

            div { class: "card",
                h3 { class: "card__title", "Goal Reviews" }
                for (index, label, done) in reviews {
                    button {
                        key: "{index}",
                        class: if done { "review-row review-row--done" } else { "review-row" },
                        r#type: "button",
                        onclick: move |_| edit(workbook, PlanEdit::ToggleReview(index)),
                        span { "{label}" }
                        span { class: "review-row__mark", if done { "✓" } else { "○" } }
                    }
                }
            }
        }
    }
}
