use blueprint_core::progress::round_percent;
use blueprint_core::{Module, Progress};

/// Radius of the circular overall-progress ring, in SVG units.
pub const RING_RADIUS: f64 = 18.0;
pub const RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * RING_RADIUS;

#[derive(Clone, Debug, PartialEq)]
pub struct TabVm {
    pub module: Module,
    pub label: &'static str,
    pub percent: f64,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub total: f64,
    pub ready_label: String,
    pub ring_label: String,
    pub tabs: Vec<TabVm>,
}

impl ProgressVm {
    #[must_use]
    pub fn new(progress: &Progress, active: Option<Module>) -> Self {
        let rounded = progress.rounded_total();
        let tabs = Module::ALL
            .into_iter()
            .map(|module| TabVm {
                module,
                label: module.tab_label(),
                percent: progress.module(module),
                active: active == Some(module),
            })
            .collect();

        Self {
            total: progress.total,
            ready_label: format!("{rounded}% Ready"),
            ring_label: format!("{rounded}%"),
            tabs,
        }
    }
}

/// Section header label, e.g. "47% Complete".
#[must_use]
pub fn complete_label(score: f64) -> String {
    format!("{}% Complete", round_percent(score))
}

/// Inline style for a horizontal bar filled to `score` percent.
#[must_use]
pub fn width_style(score: f64) -> String {
    format!("width: {:.2}%;", score.clamp(0.0, 100.0))
}

/// Stroke offset that leaves `score` percent of the ring drawn.
#[must_use]
pub fn ring_offset(score: f64) -> f64 {
    RING_CIRCUMFERENCE - score.clamp(0.0, 100.0) / 100.0 * RING_CIRCUMFERENCE
}
