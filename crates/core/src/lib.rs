#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod progress;
pub mod workbook;

pub use error::Error;
pub use progress::{Module, Progress};
pub use workbook::Workbook;
