use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The effect a person in the friend inventory has on the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendEnergy {
    Amplifier,
    #[default]
    Neutral,
    Vampire,
}

impl FriendEnergy {
    pub const ALL: [FriendEnergy; 3] = [
        FriendEnergy::Amplifier,
        FriendEnergy::Neutral,
        FriendEnergy::Vampire,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FriendEnergy::Amplifier => "amplifier",
            FriendEnergy::Neutral => "neutral",
            FriendEnergy::Vampire => "vampire",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FriendEnergy::Amplifier => "Amplifier (+)",
            FriendEnergy::Neutral => "Neutral",
            FriendEnergy::Vampire => "Vampire (-)",
        }
    }
}

impl FromStr for FriendEnergy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FriendEnergy::ALL
            .into_iter()
            .find(|energy| energy.as_str() == s)
            .ok_or_else(|| Error::UnknownOption {
                kind: "friend energy",
                raw: s.to_owned(),
            })
    }
}

/// Yes/no questions asked about every person in the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FriendTrait {
    /// On a growth journey.
    Growth,
    /// Someone the user is proud of.
    Proud,
    /// Trusted with family.
    Trust,
}

impl FriendTrait {
    pub const ALL: [FriendTrait; 3] = [FriendTrait::Growth, FriendTrait::Proud, FriendTrait::Trust];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FriendTrait::Growth => "Growth Journey?",
            FriendTrait::Proud => "Proud of?",
            FriendTrait::Trust => "Trust w/ Family?",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub name: String,
    pub growth: bool,
    pub proud: bool,
    pub trust: bool,
    pub energy: FriendEnergy,
}

impl Friend {
    #[must_use]
    pub fn has_trait(&self, friend_trait: FriendTrait) -> bool {
        match friend_trait {
            FriendTrait::Growth => self.growth,
            FriendTrait::Proud => self.proud,
            FriendTrait::Trust => self.trust,
        }
    }

    pub(crate) fn set_trait(&mut self, friend_trait: FriendTrait, value: bool) {
        match friend_trait {
            FriendTrait::Growth => self.growth = value,
            FriendTrait::Proud => self.proud = value,
            FriendTrait::Trust => self.trust = value,
        }
    }
}
