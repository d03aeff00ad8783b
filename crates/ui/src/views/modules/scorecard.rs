use blueprint_core::Module;
use blueprint_core::model::{Friend, FriendEnergy, FriendTrait, PlanEdit, TextField};
use dioxus::prelude::*;

use crate::views::components::{SectionHeader, TextInput};
use crate::views::state::{edit, use_workbook};

#[component]
pub fn ScorecardSection() -> Element {
    let workbook = use_workbook();
    let (plan, progress) = {
        let current = workbook.read();
        (current.plan().clone(), current.progress().scorecard)
    };
    let friends: Vec<(usize, Friend)> = plan.friends().iter().cloned().enumerate().collect();

    rsx! {
        div { class: "module module--scorecard",
            SectionHeader { module: Module::Scorecard, progress }

            div { class: "two-column",
                div { class: "card card--accent-blue",
                    TextInput {
                        label: "North Star Metric",
                        value: plan.text(TextField::Metric).to_string(),
                        placeholder: "One specific metric tracked daily with aggression...",
                        on_change: move |text| edit(workbook, PlanEdit::SetText(TextField::Metric, text)),
                    }
                }
                div { class: "card card--accent-red",
                    TextInput {
                        label: "High-Stakes Accountability",
                        value: plan.text(TextField::Accountability).to_string(),
                        placeholder: "If I don't hit my goal, the consequence is...",
                        on_change: move |text| edit(workbook, PlanEdit::SetText(TextField::Accountability, text)),
                    }
                }
            }

            div { class: "panel",
                div { class: "panel__header",
                    h3 { "Friend Inventory Audit" }
                    button {
                        class: "small-button no-print",
                        r#type: "button",
                        onclick: move |_| edit(workbook, PlanEdit::AddFriend),
                        "+ Add Person"
                    }
                }
                div { class: "table-wrap",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                for friend_trait in FriendTrait::ALL {
                                    th { class: "center", "{friend_trait.label()}" }
                                }
                                th { class: "center", "Energy Type" }
                                th { class: "no-print" }
                            }
                        }
                        tbody {
                            for (index, friend) in friends {
                                FriendRow { key: "{index}", index, friend }
                            }
                        }
                    }
                }
                p { class: "tip",
                    "Tip: If they are not a \"Hell Yes\", they are a \"No\". Protect your energy."
                }
            }
        }
    }
}

#[component]
fn FriendRow(index: usize, friend: Friend) -> Element {
    let workbook = use_workbook();
    let traits: Vec<(FriendTrait, bool)> = FriendTrait::ALL
        .into_iter()
        .map(|friend_trait| (friend_trait, friend.has_trait(friend_trait)))
        .collect();

    rsx! {
        tr {
            td {
                input {
                    class: "cell-input",
                    r#type: "text",
                    value: "{friend.name}",
                    placeholder: "Name",
                    oninput: move |evt| edit(
                        workbook,
                        PlanEdit::SetFriendName { index, name: evt.value() },
                    ),
                }
            }
            for (friend_trait, value) in traits {
                td { class: "center",
                    input {
                        r#type: "checkbox",
                        checked: value,
                        onchange: move |_| edit(
                            workbook,
                            PlanEdit::SetFriendTrait { index, friend_trait, value: !value },
                        ),
                    }
                }
            }
            td {
                select {
                    class: "select",
                    value: "{friend.energy.as_str()}",
                    onchange: move |evt| {
                        if let Ok(energy) = evt.value().parse::<FriendEnergy>() {
                            edit(workbook, PlanEdit::SetFriendEnergy { index, energy });
                        }
                    },
                    for energy in FriendEnergy::ALL {
                        option {
                            value: "{energy.as_str()}",
                            selected: energy == friend.energy,
                            "{energy.label()}"
                        }
                    }
                }
            }
            td { class: "center no-print",
                button {
                    class: "icon-button",
                    r#type: "button",
                    title: "Remove person",
                    onclick: move |_| edit(workbook, PlanEdit::RemoveFriend(index)),
                    "×"
                }
            }
        }
    }
}
