use blueprint_core::Module;
use blueprint_core::model::{PlanEdit, TextField};
use dioxus::prelude::*;

use crate::views::components::SectionHeader;
use crate::views::state::{edit, use_workbook};

struct LeverageCard {
    field: TextField,
    title: &'static str,
    description: &'static str,
    placeholder: &'static str,
    tone: &'static str,
}

static CARDS: [LeverageCard; 4] = [
    LeverageCard {
        field: TextField::Code,
        title: "Code (Automation/AI)",
        description: "Repetitive tasks to automate so I never have to do them again.",
        placeholder: "e.g., Use AI to draft weekly reports...",
        tone: "blue",
    },
    LeverageCard {
        field: TextField::Content,
        title: "Content (Assets/SOPs)",
        description: "Assets created once that teach or perform a function forever.",
        placeholder: "e.g., Record a video SOP for onboarding...",
        tone: "purple",
    },
    LeverageCard {
        field: TextField::Capital,
        title: "Capital (Buy Back Time)",
        description: "Investments to hire help or tools to reclaim schedule.",
        placeholder: "e.g., Hire a house cleaner to save 4 hours/week...",
        tone: "green",
    },
    LeverageCard {
        field: TextField::Collaboration,
        title: "Collaboration (Delegation)",
        description: "Who can I collaborate with? (10/80/10 Rule)",
        placeholder: "Task: ______ | Who: ______",
        tone: "orange",
    },
];

#[component]
pub fn LeverageSection() -> Element {
    let workbook = use_workbook();
    let (plan, progress) = {
        let current = workbook.read();
        (current.plan().clone(), current.progress().leverage)
    };
    let cards: Vec<(usize, TextField, &'static LeverageCard, String)> = CARDS
        .iter()
        .enumerate()
        .map(|(index, card)| (index + 1, card.field, card, plan.text(card.field).to_string()))
        .collect();

    rsx! {
        div { class: "module module--leverage",
            SectionHeader { module: Module::Leverage, progress }

            div { class: "two-column",
                for (number, field, card, value) in cards {
                    div { key: "{number}", class: "card leverage leverage--{card.tone}",
                        span { class: "leverage__number", "{number}" }
                        h3 { class: "leverage__title", "{card.title}" }
                        p { class: "card__hint", "{card.description}" }
                        textarea {
                            class: "leverage__input",
                            rows: "4",
                            value: "{value}",
                            placeholder: "{card.placeholder}",
                            oninput: move |evt| edit(workbook, PlanEdit::SetText(field, evt.value())),
                        }
                    }
                }
            }
        }
    }
}
