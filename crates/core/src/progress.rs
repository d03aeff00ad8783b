//! Completion scoring for the five workbook modules.
//!
//! Scores are percentages in `[0, 100]`. The overall total is the plain mean of
//! the five module scores, regardless of how many fields each module holds.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::model::{POWER_GOAL_COUNT, Plan, TextField};

const VISION_POINTS: f64 = (3 + POWER_GOAL_COUNT) as f64;
const AUDIT_TARGET_ROWS: f64 = 5.0;
const SYSTEMS_POINTS: f64 = 4.0;
const LEVERAGE_POINTS: f64 = 4.0;
const SCORECARD_POINTS: f64 = 3.0;

/// One of the thematic workbook sections, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Vision,
    Audit,
    Systems,
    Leverage,
    Scorecard,
}

impl Module {
    pub const ALL: [Module; 5] = [
        Module::Vision,
        Module::Audit,
        Module::Systems,
        Module::Leverage,
        Module::Scorecard,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Module::Vision => "vision",
            Module::Audit => "audit",
            Module::Systems => "systems",
            Module::Leverage => "leverage",
            Module::Scorecard => "scorecard",
        }
    }

    #[must_use]
    pub fn tab_label(self) -> &'static str {
        match self {
            Module::Vision => "1. Vision",
            Module::Audit => "2. Audit",
            Module::Systems => "3. Systems",
            Module::Leverage => "4. Leverage",
            Module::Scorecard => "5. Scorecard",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Module::Vision => "Vision & Power Goals",
            Module::Audit => "Time & Energy Audit",
            Module::Systems => "Daily Mastery System",
            Module::Leverage => "4 C's of Leverage",
            Module::Scorecard => "Scorecard & Environment",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Module::Vision => {
                "Step 1: Define the Direction. Move from a broad vision to specific daily actions."
            }
            Module::Audit => {
                "Step 2: Audit where you are. Identify 'Red' tasks to delete or delegate."
            }
            Module::Systems => {
                "Step 3: Create Daily Systems. Consistent execution beats motivation."
            }
            Module::Leverage => {
                "Step 4: Create Leverage. Use Code, Content, Capital, and Collaboration to multiply output."
            }
            Module::Scorecard => {
                "Steps 5 & 6: Network, Boundaries, and Metrics. Measure growth and audit your circle."
            }
        }
    }

    /// The module after this one, or `None` for the last tab.
    #[must_use]
    pub fn next(self) -> Option<Module> {
        let position = Module::ALL.iter().position(|module| *module == self)?;
        Module::ALL.get(position + 1).copied()
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Module {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::ALL
            .into_iter()
            .find(|module| module.id() == s)
            .ok_or_else(|| Error::UnknownModule(s.to_owned()))
    }
}

/// Per-module completion plus the unweighted overall mean.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Progress {
    pub vision: f64,
    pub audit: f64,
    pub systems: f64,
    pub leverage: f64,
    pub scorecard: f64,
    pub total: f64,
}

impl Progress {
    /// Score a plan. Pure: the same plan always yields the same progress.
    #[must_use]
    pub fn of(plan: &Plan) -> Self {
        let vision = percent(vision_points(plan), VISION_POINTS);
        let audit = percent(audit_rows(plan), AUDIT_TARGET_ROWS).min(100.0);
        let systems = percent(
            count_filled(
                plan,
                &[
                    TextField::Task1,
                    TextField::Task2,
                    TextField::Task3,
                    TextField::NetTime,
                ],
            ),
            SYSTEMS_POINTS,
        );
        let leverage = percent(
            count_filled(
                plan,
                &[
                    TextField::Code,
                    TextField::Content,
                    TextField::Capital,
                    TextField::Collaboration,
                ],
            ),
            LEVERAGE_POINTS,
        );
        let scorecard = percent(scorecard_points(plan), SCORECARD_POINTS);

        let total = (vision + audit + systems + leverage + scorecard) / Module::ALL.len() as f64;

        Self {
            vision,
            audit,
            systems,
            leverage,
            scorecard,
            total,
        }
    }

    #[must_use]
    pub fn module(&self, module: Module) -> f64 {
        match module {
            Module::Vision => self.vision,
            Module::Audit => self.audit,
            Module::Systems => self.systems,
            Module::Leverage => self.leverage,
            Module::Scorecard => self.scorecard,
        }
    }

    /// Overall score rounded to a whole percent for display.
    #[must_use]
    pub fn rounded_total(&self) -> u8 {
        round_percent(self.total)
    }
}

/// Round a `[0, 100]` score to the nearest whole percent.
#[must_use]
pub fn round_percent(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// Non-empty after trimming surrounding whitespace.
#[must_use]
pub fn is_filled(text: &str) -> bool {
    !text.trim().is_empty()
}

fn percent(filled: usize, out_of: f64) -> f64 {
    filled as f64 / out_of * 100.0
}

fn count_filled(plan: &Plan, fields: &[TextField]) -> usize {
    fields
        .iter()
        .filter(|field| is_filled(plan.text(**field)))
        .count()
}

fn vision_points(plan: &Plan) -> usize {
    count_filled(
        plan,
        &[
            TextField::NorthStar,
            TextField::HighImpactProject,
            TextField::Mins,
        ],
    ) + plan
        .power_goals()
        .iter()
        .filter(|goal| is_filled(goal))
        .count()
}

fn audit_rows(plan: &Plan) -> usize {
    plan.audit_log()
        .iter()
        .filter(|row| is_filled(&row.activity))
        .count()
}

fn scorecard_points(plan: &Plan) -> usize {
    let named_friend = plan.friends().iter().any(|friend| is_filled(&friend.name));
    count_filled(plan, &[TextField::Metric, TextField::Accountability]) + usize::from(named_friend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlanEdit;

    fn set(plan: Plan, field: TextField, text: &str) -> Plan {
        plan.apply(PlanEdit::SetText(field, text.to_string()))
    }

    fn with_activities(count: usize) -> Plan {
        let mut plan = Plan::default();
        while plan.audit_log().len() < count {
            plan = plan.apply(PlanEdit::AddAuditRow);
        }
        for index in 0..count {
            plan = plan.apply(PlanEdit::SetAuditActivity {
                index,
                activity: format!("activity {index}"),
            });
        }
        plan
    }

    fn filled_plan() -> Plan {
        let mut plan = Plan::default();
        for field in TextField::ALL {
            plan = set(plan, field, "done");
        }
        for index in 0..POWER_GOAL_COUNT {
            plan = plan.apply(PlanEdit::SetPowerGoal {
                index,
                text: format!("goal {index}"),
            });
        }
        plan = plan.apply(PlanEdit::SetFriendName {
            index: 0,
            name: "Alex".into(),
        });
        for index in 0..5 {
            if index >= plan.audit_log().len() {
                plan = plan.apply(PlanEdit::AddAuditRow);
            }
            plan = plan.apply(PlanEdit::SetAuditActivity {
                index,
                activity: "deep work".into(),
            });
        }
        plan
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn default_plan_scores_zero() {
        let progress = Progress::of(&Plan::default());
        assert_eq!(progress, Progress::default());
        assert_eq!(progress.rounded_total(), 0);
    }

    #[test]
    fn fully_filled_plan_scores_one_hundred() {
        let progress = Progress::of(&filled_plan());
        for module in Module::ALL {
            assert_close(progress.module(module), 100.0);
        }
        assert_close(progress.total, 100.0);
    }

    #[test]
    fn vision_counts_three_fields_and_twelve_goals_out_of_fifteen() {
        let mut plan = set(Plan::default(), TextField::NorthStar, "North");
        plan = set(plan, TextField::HighImpactProject, "Project");
        plan = set(plan, TextField::Mins, "Step");
        assert_close(Progress::of(&plan).vision, 20.0);

        for index in 0..POWER_GOAL_COUNT {
            plan = plan.apply(PlanEdit::SetPowerGoal {
                index,
                text: "goal".into(),
            });
        }
        assert_close(Progress::of(&plan).vision, 100.0);
    }

    #[test]
    fn audit_caps_at_five_rows() {
        assert_close(Progress::of(&with_activities(3)).audit, 60.0);
        assert_close(Progress::of(&with_activities(5)).audit, 100.0);
        assert_close(Progress::of(&with_activities(6)).audit, 100.0);
    }

    #[test]
    fn systems_ignores_habit_checkboxes() {
        let plan = Plan::default()
            .apply(PlanEdit::ToggleFlag(crate::model::Flag::MorningAttack))
            .apply(PlanEdit::ToggleReview(0));
        assert_close(Progress::of(&plan).systems, 0.0);

        let plan = set(plan, TextField::Task2, "call the bank");
        assert_close(Progress::of(&plan).systems, 25.0);
    }

    #[test]
    fn scorecard_counts_named_friends_once() {
        let mut plan = set(Plan::default(), TextField::Metric, "revenue");
        for index in 0..3 {
            if index >= plan.friends().len() {
                plan = plan.apply(PlanEdit::AddFriend);
            }
            plan = plan.apply(PlanEdit::SetFriendName {
                index,
                name: format!("friend {index}"),
            });
        }
        let expected = 2.0 / 3.0 * 100.0;
        assert_close(Progress::of(&plan).scorecard, expected);
    }

    #[test]
    fn whitespace_only_text_is_not_filled() {
        let blank = set(Plan::default(), TextField::NorthStar, "   ");
        let blank = set(blank, TextField::Code, "\t\n");
        let blank = blank.apply(PlanEdit::SetFriendName {
            index: 0,
            name: " ".into(),
        });
        assert_eq!(Progress::of(&blank), Progress::of(&Plan::default()));
    }

    #[test]
    fn total_is_unweighted_mean_of_modules() {
        let plan = set(Plan::default(), TextField::Code, "scripts");
        let plan = set(plan, TextField::Task1, "plan tomorrow");
        let plan = plan.apply(PlanEdit::SetAuditActivity {
            index: 0,
            activity: "email".into(),
        });
        let progress = Progress::of(&plan);
        let mean = Module::ALL
            .iter()
            .map(|module| progress.module(*module))
            .sum::<f64>()
            / 5.0;
        assert_close(progress.total, mean);
        assert_close(progress.total, (0.0 + 20.0 + 25.0 + 25.0 + 0.0) / 5.0);
        for module in Module::ALL {
            let score = progress.module(module);
            assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let plan = filled_plan().apply(PlanEdit::RemoveFriend(0));
        assert_eq!(Progress::of(&plan), Progress::of(&plan));
    }

    #[test]
    fn modules_walk_in_tab_order() {
        assert_eq!(Module::Vision.next(), Some(Module::Audit));
        assert_eq!(Module::Leverage.next(), Some(Module::Scorecard));
        assert_eq!(Module::Scorecard.next(), None);
        assert_eq!("systems".parse::<Module>().unwrap(), Module::Systems);
        assert!("habits".parse::<Module>().is_err());
    }
}
