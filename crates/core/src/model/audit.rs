use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How an activity in the time log affects the user's energy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Green,
    #[default]
    Yellow,
    Red,
}

impl Energy {
    pub const ALL: [Energy; 3] = [Energy::Green, Energy::Yellow, Energy::Red];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Energy::Green => "green",
            Energy::Yellow => "yellow",
            Energy::Red => "red",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Energy::Green => "Green (Gives)",
            Energy::Yellow => "Yellow (Neutral)",
            Energy::Red => "Red (Drains)",
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Energy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Energy::ALL
            .into_iter()
            .find(|energy| energy.as_str() == s)
            .ok_or_else(|| Error::UnknownOption {
                kind: "energy",
                raw: s.to_owned(),
            })
    }
}

/// What the user decided to do with a logged activity.
///
/// `Undecided` persists as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    #[default]
    #[serde(rename = "")]
    Undecided,
    Keep,
    Delete,
    Delegate,
    Leverage,
}

impl AuditAction {
    pub const ALL: [AuditAction; 5] = [
        AuditAction::Undecided,
        AuditAction::Keep,
        AuditAction::Delete,
        AuditAction::Delegate,
        AuditAction::Leverage,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Undecided => "",
            AuditAction::Keep => "keep",
            AuditAction::Delete => "delete",
            AuditAction::Delegate => "delegate",
            AuditAction::Leverage => "leverage",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AuditAction::Undecided => "- Select -",
            AuditAction::Keep => "Keep",
            AuditAction::Delete => "Delete",
            AuditAction::Delegate => "Delegate",
            AuditAction::Leverage => "Leverage",
        }
    }
}

impl FromStr for AuditAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuditAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| Error::UnknownOption {
                kind: "audit action",
                raw: s.to_owned(),
            })
    }
}

/// One time block in the time & energy log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub time: String,
    pub activity: String,
    pub energy: Energy,
    pub action: AuditAction,
}

impl AuditEntry {
    /// An empty row pre-labelled with a time slot.
    #[must_use]
    pub fn with_time(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            ..Self::default()
        }
    }
}
