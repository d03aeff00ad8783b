use blueprint_core::Module;
use blueprint_core::model::{AuditAction, AuditEntry, Energy, PlanEdit};
use dioxus::prelude::*;

use crate::views::components::SectionHeader;
use crate::views::state::{edit, use_workbook};

fn energy_class(energy: Energy) -> &'static str {
    match energy {
        Energy::Green => "select energy energy--green",
        Energy::Yellow => "select energy energy--yellow",
        Energy::Red => "select energy energy--red",
    }
}

#[component]
pub fn AuditSection() -> Element {
    let workbook = use_workbook();
    let (rows, progress): (Vec<(usize, AuditEntry)>, f64) = {
        let current = workbook.read();
        (
            current.plan().audit_log().iter().cloned().enumerate().collect(),
            current.progress().audit,
        )
    };

    rsx! {
        div { class: "module module--audit",
            SectionHeader { module: Module::Audit, progress }

            div { class: "table-wrap",
                table { class: "table",
                    thead {
                        tr {
                            th { "Time Slot" }
                            th { "Activity" }
                            th { "Energy" }
                            th { "Action" }
                            th { class: "no-print" }
                        }
                    }
                    tbody {
                        for (index, row) in rows {
                            tr { key: "{index}",
                                td {
                                    input {
                                        class: "cell-input",
                                        r#type: "text",
                                        value: "{row.time}",
                                        placeholder: "08:00 - 08:15",
                                        oninput: move |evt| edit(
                                            workbook,
                                            PlanEdit::SetAuditTime { index, time: evt.value() },
                                        ),
                                    }
                                }
                                td {
                                    input {
                                        class: "cell-input",
                                        r#type: "text",
                                        value: "{row.activity}",
                                        placeholder: "Checking emails...",
                                        oninput: move |evt| edit(
                                            workbook,
                                            PlanEdit::SetAuditActivity { index, activity: evt.value() },
                                        ),
                                    }
                                }
                                td {
                                    select {
                                        class: energy_class(row.energy),
                                        value: "{row.energy.as_str()}",
                                        onchange: move |evt| {
                                            if let Ok(energy) = evt.value().parse::<Energy>() {
                                                edit(workbook, PlanEdit::SetAuditEnergy { index, energy });
                                            }
                                        },
                                        for energy in Energy::ALL {
                                            option {
                                                value: "{energy.as_str()}",
                                                selected: energy == row.energy,
                                                "{energy.label()}"
                                            }
                                        }
                                    }
                                }
                                td {
                                    select {
                                        class: "select",
                                        value: "{row.action.as_str()}",
                                        onchange: move |evt| {
                                            if let Ok(action) = evt.value().parse::<AuditAction>() {
                                                edit(workbook, PlanEdit::SetAuditAction { index, action });
                                            }
                                        },
                                        for action in AuditAction::ALL {
                                            option {
                                                value: "{action.as_str()}",
                                                selected: action == row.action,
                                                "{action.label()}"
                                            }
                                        }
                                    }
                                }
                                td { class: "no-print",
                                    button {
                                        class: "icon-button",
                                        r#type: "button",
                                        title: "Remove time block",
                                        onclick: move |_| edit(workbook, PlanEdit::RemoveAuditRow(index)),
                                        "×"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            button {
                class: "link-button no-print",
                r#type: "button",
                onclick: move |_| edit(workbook, PlanEdit::AddAuditRow),
                "+ Add Time Block"
            }

            div { class: "callout",
                h4 { "The 10/80/10 Rule for Delegation" }
                p {
                    "I handle the first 10% (Vision/Direction) and the last 10% (Review/Approval). "
                    "Someone or something else handles the middle 80% (Execution)."
                }
            }
        }
    }
}
