use blueprint_core::Module;
use dioxus::prelude::*;

use crate::vm::{RING_CIRCUMFERENCE, RING_RADIUS, complete_label, ring_offset, width_style};

#[component]
pub fn ProgressBar(percent: f64) -> Element {
    rsx! {
        div { class: "progress-track",
            div { class: "progress-fill", style: "{width_style(percent)}" }
        }
    }
}

#[component]
pub fn CircularProgress(percent: f64, label: String) -> Element {
    let offset = ring_offset(percent);
    rsx! {
        div { class: "progress-ring",
            svg { view_box: "0 0 48 48",
                circle {
                    class: "progress-ring__track",
                    stroke_width: "3",
                    stroke: "currentColor",
                    fill: "transparent",
                    r: "{RING_RADIUS}",
                    cx: "24",
                    cy: "24",
                }
                circle {
                    class: "progress-ring__value",
                    stroke_width: "3",
                    stroke_dasharray: "{RING_CIRCUMFERENCE}",
                    stroke_dashoffset: "{offset}",
                    stroke_linecap: "round",
                    stroke: "currentColor",
                    fill: "transparent",
                    r: "{RING_RADIUS}",
                    cx: "24",
                    cy: "24",
                }
            }
            span { class: "progress-ring__label", "{label}" }
        }
    }
}

#[component]
pub fn SectionHeader(module: Module, progress: f64) -> Element {
    rsx! {
        div { class: "section-header",
            div { class: "section-header__row",
                h2 { class: "section-title", "{module.title()}" }
                div { class: "section-header__progress",
                    span { class: "section-header__label", "{complete_label(progress)}" }
                    ProgressBar { percent: progress }
                }
            }
            p { class: "section-subtitle", "{module.subtitle()}" }
        }
    }
}

/// Labelled single-line input or textarea that reports every keystroke.
#[component]
pub fn TextInput(
    label: &'static str,
    value: String,
    placeholder: &'static str,
    #[props(default)] multiline: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            if multiline {
                textarea {
                    class: "field-input",
                    rows: "3",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    oninput: move |evt| on_change.call(evt.value()),
                }
            } else {
                input {
                    class: "field-input",
                    r#type: "text",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    oninput: move |evt| on_change.call(evt.value()),
                }
            }
        }
    }
}
