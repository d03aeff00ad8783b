use blueprint_core::Module;
use blueprint_core::model::{POWER_GOAL_COUNT, PlanEdit, TextField};
use dioxus::prelude::*;

use crate::views::components::{SectionHeader, TextInput};
use crate::views::state::{edit, use_workbook};

/// Goals shown before the list is expanded.
const VISIBLE_GOALS: usize = 3;

#[component]
pub fn VisionSection() -> Element {
    let workbook = use_workbook();
    let mut expanded = use_signal(|| false);
    let (plan, progress) = {
        let current = workbook.read();
        (current.plan().clone(), current.progress().vision)
    };
    let shown = if expanded() { POWER_GOAL_COUNT } else { VISIBLE_GOALS };
    let hidden = POWER_GOAL_COUNT - VISIBLE_GOALS;
    let goals: Vec<(usize, usize, String)> = plan
        .power_goals()
        .iter()
        .take(shown)
        .enumerate()
        .map(|(index, goal)| (index, index + 1, goal.clone()))
        .collect();

    rsx! {
        div { class: "module module--vision",
            SectionHeader { module: Module::Vision, progress }

            div { class: "panel",
                TextInput {
                    label: "My North Star (SMART Vision)",
                    value: plan.text(TextField::NorthStar).to_string(),
                    placeholder: "Specific, Measurable, Attainable, Realistic, Time-bound. E.g., 'By Dec 31, 2026, I have...'",
                    multiline: true,
                    on_change: move |text| edit(workbook, PlanEdit::SetText(TextField::NorthStar, text)),
                }
            }

            div { class: "goals",
                div { class: "goals__header",
                    h3 { "The 12 Power Goals (Annual Projects)" }
                    button {
                        class: "link-button no-print",
                        r#type: "button",
                        onclick: move |_| expanded.toggle(),
                        if expanded() { "Collapse" } else { "Show All 12" }
                    }
                }
                div { class: "goals__grid",
                    for (index, number, goal) in goals {
                        div { key: "{index}", class: "goal",
                            span { class: "goal__number", "{number}." }
                            input {
                                class: "field-input goal__input",
                                r#type: "text",
                                value: "{goal}",
                                placeholder: "Power Goal #{number}",
                                oninput: move |evt| edit(
                                    workbook,
                                    PlanEdit::SetPowerGoal { index, text: evt.value() },
                                ),
                            }
                        }
                    }
                }
                if !expanded() {
                    p { class: "goals__hidden no-print", "... {hidden} more goals hidden ..." }
                }
            }

            div { class: "two-column",
                div { class: "panel panel--blue",
                    TextInput {
                        label: "The High-Impact Project",
                        value: plan.text(TextField::HighImpactProject).to_string(),
                        placeholder: "The one project that unlocks the entire vision...",
                        on_change: move |text| edit(workbook, PlanEdit::SetText(TextField::HighImpactProject, text)),
                    }
                }
                div { class: "panel panel--indigo",
                    TextInput {
                        label: "Daily MINS (Most Important Next Step)",
                        value: plan.text(TextField::Mins).to_string(),
                        placeholder: "What is the single action I must take today?",
                        on_change: move |text| edit(workbook, PlanEdit::SetText(TextField::Mins, text)),
                    }
                }
            }
        }
    }
}
