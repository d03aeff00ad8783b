use thiserror::Error;

/// Raised when a persisted or UI-supplied option string names no known variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown {kind} option: {raw:?}")]
    UnknownOption { kind: &'static str, raw: String },
    #[error("unknown module id: {0:?}")]
    UnknownModule(String),
}
