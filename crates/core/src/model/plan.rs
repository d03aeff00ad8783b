use serde::{Deserialize, Serialize};

use crate::model::audit::AuditEntry;
use crate::model::friend::Friend;

/// Number of annual power goals; the slot count never changes.
pub const POWER_GOAL_COUNT: usize = 12;

/// Number of daily goal reviews (morning, mid-day, evening).
pub const REVIEW_COUNT: usize = 3;

/// Time slots pre-filled into a fresh time & energy log.
pub const DEFAULT_AUDIT_SLOTS: [&str; 2] = ["08:00 - 08:30", "08:30 - 09:00"];

//
// ─── FIELD NAMES ───────────────────────────────────────────────────────────────
//

/// Every free-text scalar field of a [`Plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    NorthStar,
    HighImpactProject,
    Mins,
    Task1,
    Task2,
    Task3,
    NetTime,
    Metric,
    Accountability,
    Code,
    Content,
    Capital,
    Collaboration,
}

impl TextField {
    pub const ALL: [TextField; 13] = [
        TextField::NorthStar,
        TextField::HighImpactProject,
        TextField::Mins,
        TextField::Task1,
        TextField::Task2,
        TextField::Task3,
        TextField::NetTime,
        TextField::Metric,
        TextField::Accountability,
        TextField::Code,
        TextField::Content,
        TextField::Capital,
        TextField::Collaboration,
    ];

    pub const TASKS: [TextField; 3] = [TextField::Task1, TextField::Task2, TextField::Task3];

    /// The key this field is stored under.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            TextField::NorthStar => "northStar",
            TextField::HighImpactProject => "highImpactProject",
            TextField::Mins => "mins",
            TextField::Task1 => "task1",
            TextField::Task2 => "task2",
            TextField::Task3 => "task3",
            TextField::NetTime => "netTime",
            TextField::Metric => "metric",
            TextField::Accountability => "accountability",
            TextField::Code => "code",
            TextField::Content => "content",
            TextField::Capital => "capital",
            TextField::Collaboration => "collaboration",
        }
    }
}

/// Boolean habit checkboxes outside the review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    MorningAttack,
    Pomodoro1,
    Pomodoro2,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::MorningAttack, Flag::Pomodoro1, Flag::Pomodoro2];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Flag::MorningAttack => "morningAttack",
            Flag::Pomodoro1 => "pomodoro1",
            Flag::Pomodoro2 => "pomodoro2",
        }
    }
}

//
// ─── PLAN ──────────────────────────────────────────────────────────────────────
//

/// Everything the user has entered into the workbook.
///
/// The serialized shape (camelCase keys) is the persisted format. Fields are
/// private; changes go through [`Plan::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    // Vision
    north_star: String,
    power_goals: [String; POWER_GOAL_COUNT],
    high_impact_project: String,
    mins: String,
    // Audit
    audit_log: Vec<AuditEntry>,
    // Systems
    task1: String,
    task2: String,
    task3: String,
    morning_attack: bool,
    pomodoro1: bool,
    pomodoro2: bool,
    reviews: [bool; REVIEW_COUNT],
    net_time: String,
    // Scorecard
    metric: String,
    accountability: String,
    friends: Vec<Friend>,
    // Leverage
    code: String,
    content: String,
    capital: String,
    collaboration: String,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            north_star: String::new(),
            power_goals: Default::default(),
            high_impact_project: String::new(),
            mins: String::new(),
            audit_log: DEFAULT_AUDIT_SLOTS
                .iter()
                .map(|slot| AuditEntry::with_time(*slot))
                .collect(),
            task1: String::new(),
            task2: String::new(),
            task3: String::new(),
            morning_attack: false,
            pomodoro1: false,
            pomodoro2: false,
            reviews: [false; REVIEW_COUNT],
            net_time: String::new(),
            metric: String::new(),
            accountability: String::new(),
            friends: vec![Friend::default()],
            code: String::new(),
            content: String::new(),
            capital: String::new(),
            collaboration: String::new(),
        }
    }
}

impl Plan {
    #[must_use]
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::NorthStar => &self.north_star,
            TextField::HighImpactProject => &self.high_impact_project,
            TextField::Mins => &self.mins,
            TextField::Task1 => &self.task1,
            TextField::Task2 => &self.task2,
            TextField::Task3 => &self.task3,
            TextField::NetTime => &self.net_time,
            TextField::Metric => &self.metric,
            TextField::Accountability => &self.accountability,
            TextField::Code => &self.code,
            TextField::Content => &self.content,
            TextField::Capital => &self.capital,
            TextField::Collaboration => &self.collaboration,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::NorthStar => &mut self.north_star,
            TextField::HighImpactProject => &mut self.high_impact_project,
            TextField::Mins => &mut self.mins,
            TextField::Task1 => &mut self.task1,
            TextField::Task2 => &mut self.task2,
            TextField::Task3 => &mut self.task3,
            TextField::NetTime => &mut self.net_time,
            TextField::Metric => &mut self.metric,
            TextField::Accountability => &mut self.accountability,
            TextField::Code => &mut self.code,
            TextField::Content => &mut self.content,
            TextField::Capital => &mut self.capital,
            TextField::Collaboration => &mut self.collaboration,
        }
    }

    #[must_use]
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::MorningAttack => self.morning_attack,
            Flag::Pomodoro1 => self.pomodoro1,
            Flag::Pomodoro2 => self.pomodoro2,
        }
    }

    pub(crate) fn flag_mut(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::MorningAttack => &mut self.morning_attack,
            Flag::Pomodoro1 => &mut self.pomodoro1,
            Flag::Pomodoro2 => &mut self.pomodoro2,
        }
    }

    #[must_use]
    pub fn power_goals(&self) -> &[String; POWER_GOAL_COUNT] {
        &self.power_goals
    }

    pub(crate) fn power_goals_mut(&mut self) -> &mut [String; POWER_GOAL_COUNT] {
        &mut self.power_goals
    }

    #[must_use]
    pub fn reviews(&self) -> [bool; REVIEW_COUNT] {
        self.reviews
    }

    pub(crate) fn reviews_mut(&mut self) -> &mut [bool; REVIEW_COUNT] {
        &mut self.reviews
    }

    #[must_use]
    pub fn audit_log(&self) -> &[AuditEntry] {
        &self.audit_log
    }

    pub(crate) fn audit_log_mut(&mut self) -> &mut Vec<AuditEntry> {
        &mut self.audit_log
    }

    #[must_use]
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub(crate) fn friends_mut(&mut self) -> &mut Vec<Friend> {
        &mut self.friends
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuditAction, Energy, FriendEnergy};

    #[test]
    fn default_plan_has_fixed_slots_and_seed_rows() {
        let plan = Plan::default();
        assert_eq!(plan.power_goals().len(), POWER_GOAL_COUNT);
        assert!(plan.power_goals().iter().all(String::is_empty));
        assert_eq!(plan.reviews(), [false; REVIEW_COUNT]);
        assert_eq!(plan.audit_log().len(), 2);
        assert_eq!(plan.audit_log()[0].time, "08:00 - 08:30");
        assert_eq!(plan.audit_log()[1].energy, Energy::Yellow);
        assert_eq!(plan.audit_log()[1].action, AuditAction::Undecided);
        assert_eq!(plan.friends().len(), 1);
        assert_eq!(plan.friends()[0].energy, FriendEnergy::Neutral);
        assert!(TextField::ALL.iter().all(|field| plan.text(*field).is_empty()));
        assert!(Flag::ALL.iter().all(|flag| !plan.flag(*flag)));
    }

    #[test]
    fn serializes_with_persisted_key_names() {
        let value = serde_json::to_value(Plan::default()).unwrap();
        let object = value.as_object().unwrap();
        for field in TextField::ALL {
            assert!(object.contains_key(field.key()), "missing {}", field.key());
        }
        for flag in Flag::ALL {
            assert!(object.contains_key(flag.key()), "missing {}", flag.key());
        }
        for key in ["powerGoals", "auditLog", "reviews", "friends"] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), TextField::ALL.len() + Flag::ALL.len() + 4);
        assert_eq!(value["powerGoals"].as_array().unwrap().len(), POWER_GOAL_COUNT);
        assert_eq!(value["auditLog"][0]["action"], "");
        assert_eq!(value["friends"][0]["energy"], "neutral");
    }

    #[test]
    fn rejects_power_goals_of_the_wrong_length() {
        let mut value = serde_json::to_value(Plan::default()).unwrap();
        value["powerGoals"] = serde_json::json!(["only", "two"]);
        assert!(serde_json::from_value::<Plan>(value).is_err());
    }
}
