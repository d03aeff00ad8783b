use blueprint_core::Module;
use blueprint_core::model::{Flag, PlanEdit, TextField};
use dioxus::prelude::*;

use crate::views::components::{SectionHeader, TextInput};
use crate::views::state::{edit, use_workbook};

pub(crate) const REVIEW_LABELS: [&str; 3] = ["Morning Review", "Mid-day Review", "Evening Review"];

const TASK_PLACEHOLDERS: [&str; 3] = [
    "1. ________________",
    "2. ________________",
    "3. ________________",
];

#[component]
pub fn SystemsSection() -> Element {
    let workbook = use_workbook();
    let (plan, progress) = {
        let current = workbook.read();
        (current.plan().clone(), current.progress().systems)
    };
    let tasks: Vec<(TextField, &'static str, String)> = TextField::TASKS
        .into_iter()
        .zip(TASK_PLACEHOLDERS)
        .map(|(field, placeholder)| (field, placeholder, plan.text(field).to_string()))
        .collect();
    let reviews: Vec<(usize, &'static str, bool)> = REVIEW_LABELS
        .into_iter()
        .zip(plan.reviews())
        .enumerate()
        .map(|(index, (label, done))| (index, label, done))
        .collect();
    let morning_attack = plan.flag(Flag::MorningAttack);
    let pomodoro1 = plan.flag(Flag::Pomodoro1);
    let pomodoro2 = plan.flag(Flag::Pomodoro2);

    rsx! {
        div { class: "module module--systems",
            SectionHeader { module: Module::Systems, progress }

            div { class: "two-column",
                div { class: "card",
                    h3 { class: "card__title", "Night-Before Design" }
                    p { class: "card__hint", "What are my 3 key tasks for tomorrow?" }
                    for (field, placeholder, value) in tasks {
                        input {
                            key: "{field.key()}",
                            class: "line-input",
                            r#type: "text",
                            value: "{value}",
                            placeholder: "{placeholder}",
                            oninput: move |evt| edit(workbook, PlanEdit::SetText(field, evt.value())),
                        }
                    }
                }

                div { class: "card",
                    h3 { class: "card__title", "Morning Routine" }
                    label { class: "check-row",
                        input {
                            r#type: "checkbox",
                            checked: morning_attack,
                            onchange: move |_| edit(workbook, PlanEdit::ToggleFlag(Flag::MorningAttack)),
                        }
                        span { "First 90 Mins: Attack most important task (No distractions)" }
                    }
                    div { class: "pomodoro",
                        p { class: "pomodoro__title", "Pomodoro Tracker:" }
                        label { class: "check-row check-row--small",
                            input {
                                r#type: "checkbox",
                                checked: pomodoro1,
                                onchange: move |_| edit(workbook, PlanEdit::ToggleFlag(Flag::Pomodoro1)),
                            }
                            "Sprint 1 (25m work / 5m move)"
                        }
                        label { class: "check-row check-row--small",
                            input {
                                r#type: "checkbox",
                                checked: pomodoro2,
                                onchange: move |_| edit(workbook, PlanEdit::ToggleFlag(Flag::Pomodoro2)),
                            }
                            "Sprint 2 (25m work / 5m move)"
                        }
                    }
                }
            }

            div { class: "panel",
                h3 { "Power Goal Review (3x Daily)" }
                div { class: "reviews",
                    for (index, label, done) in reviews {
                        label {
                            key: "{index}",
                            class: if done { "review review--done" } else { "review" },
                            input {
                                r#type: "checkbox",
                                checked: done,
                                onchange: move |_| edit(workbook, PlanEdit::ToggleReview(index)),
                            }
                            span { "{label}" }
                        }
                    }
                }
            }

            TextInput {
                label: "Net Time Stacking",
                value: plan.text(TextField::NetTime).to_string(),
                placeholder: "e.g., Doing 1-on-1 calls while walking...",
                on_change: move |text| edit(workbook, PlanEdit::SetText(TextField::NetTime, text)),
            }
        }
    }
}
