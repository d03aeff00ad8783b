mod progress_vm;

pub use progress_vm::{
    ProgressVm, RING_CIRCUMFERENCE, RING_RADIUS, TabVm, complete_label, ring_offset, width_style,
};
