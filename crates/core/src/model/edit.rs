use crate::model::audit::{AuditAction, AuditEntry, Energy};
use crate::model::friend::{Friend, FriendEnergy, FriendTrait};
use crate::model::plan::{Flag, Plan, TextField};

/// A single user change to a [`Plan`].
///
/// Index-carrying edits that point past the end of their sequence leave the
/// plan unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEdit {
    SetText(TextField, String),
    SetFlag(Flag, bool),
    ToggleFlag(Flag),
    SetPowerGoal { index: usize, text: String },
    ToggleReview(usize),

    AddAuditRow,
    RemoveAuditRow(usize),
    SetAuditTime { index: usize, time: String },
    SetAuditActivity { index: usize, activity: String },
    SetAuditEnergy { index: usize, energy: Energy },
    SetAuditAction { index: usize, action: AuditAction },

    AddFriend,
    RemoveFriend(usize),
    SetFriendName { index: usize, name: String },
    SetFriendTrait {
        index: usize,
        friend_trait: FriendTrait,
        value: bool,
    },
    SetFriendEnergy { index: usize, energy: FriendEnergy },
}

impl Plan {
    /// Returns a new plan with `edit` applied; `self` is left untouched.
    #[must_use]
    pub fn apply(&self, edit: PlanEdit) -> Plan {
        let mut next = self.clone();
        next.apply_in_place(edit);
        next
    }

    fn apply_in_place(&mut self, edit: PlanEdit) {
        match edit {
            PlanEdit::SetText(field, text) => *self.text_mut(field) = text,
            PlanEdit::SetFlag(flag, value) => *self.flag_mut(flag) = value,
            PlanEdit::ToggleFlag(flag) => {
                let slot = self.flag_mut(flag);
                *slot = !*slot;
            }
            PlanEdit::SetPowerGoal { index, text } => {
                if let Some(goal) = self.power_goals_mut().get_mut(index) {
                    *goal = text;
                }
            }
            PlanEdit::ToggleReview(index) => {
                if let Some(done) = self.reviews_mut().get_mut(index) {
                    *done = !*done;
                }
            }

            PlanEdit::AddAuditRow => self.audit_log_mut().push(AuditEntry::default()),
            PlanEdit::RemoveAuditRow(index) => {
                let log = self.audit_log_mut();
                if index < log.len() {
                    log.remove(index);
                }
            }
            PlanEdit::SetAuditTime { index, time } => {
                if let Some(row) = self.audit_log_mut().get_mut(index) {
                    row.time = time;
                }
            }
            PlanEdit::SetAuditActivity { index, activity } => {
                if let Some(row) = self.audit_log_mut().get_mut(index) {
                    row.activity = activity;
                }
            }
            PlanEdit::SetAuditEnergy { index, energy } => {
                if let Some(row) = self.audit_log_mut().get_mut(index) {
                    row.energy = energy;
                }
            }
            PlanEdit::SetAuditAction { index, action } => {
                if let Some(row) = self.audit_log_mut().get_mut(index) {
                    row.action = action;
                }
            }

            PlanEdit::AddFriend => self.friends_mut().push(Friend::default()),
            PlanEdit::RemoveFriend(index) => {
                let friends = self.friends_mut();
                if index < friends.len() {
                    friends.remove(index);
                }
            }
            PlanEdit::SetFriendName { index, name } => {
                if let Some(friend) = self.friends_mut().get_mut(index) {
                    friend.name = name;
                }
            }
            PlanEdit::SetFriendTrait {
                index,
                friend_trait,
                value,
            } => {
                if let Some(friend) = self.friends_mut().get_mut(index) {
                    friend.set_trait(friend_trait, value);
                }
            }
            PlanEdit::SetFriendEnergy { index, energy } => {
                if let Some(friend) = self.friends_mut().get_mut(index) {
                    friend.energy = energy;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_returns_new_value_and_leaves_receiver_alone() {
        let plan = Plan::default();
        let next = plan.apply(PlanEdit::SetText(
            TextField::NorthStar,
            "Ship the book".to_string(),
        ));
        assert_eq!(next.text(TextField::NorthStar), "Ship the book");
        assert_eq!(plan.text(TextField::NorthStar), "");
        assert_eq!(plan, Plan::default());
    }

    #[test]
    fn rows_grow_and_shrink_by_one() {
        let plan = Plan::default();
        let before = plan.audit_log().len();
        let grown = plan.apply(PlanEdit::AddAuditRow);
        assert_eq!(grown.audit_log().len(), before + 1);
        assert_eq!(grown.audit_log()[before], AuditEntry::default());

        let shrunk = grown.apply(PlanEdit::RemoveAuditRow(0));
        assert_eq!(shrunk.audit_log().len(), before);
        assert_eq!(shrunk.audit_log()[0].time, "08:30 - 09:00");

        let friends = plan.apply(PlanEdit::AddFriend).apply(PlanEdit::RemoveFriend(0));
        assert_eq!(friends.friends().len(), plan.friends().len());
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let plan = Plan::default();
        let edits = [
            PlanEdit::SetPowerGoal {
                index: 12,
                text: "x".into(),
            },
            PlanEdit::ToggleReview(3),
            PlanEdit::RemoveAuditRow(99),
            PlanEdit::SetAuditActivity {
                index: 2,
                activity: "x".into(),
            },
            PlanEdit::RemoveFriend(1),
            PlanEdit::SetFriendName {
                index: 5,
                name: "x".into(),
            },
        ];
        for edit in edits {
            assert_eq!(plan.apply(edit.clone()), plan, "{edit:?} changed the plan");
        }
    }

    #[test]
    fn toggles_flip_state() {
        let plan = Plan::default()
            .apply(PlanEdit::ToggleFlag(Flag::Pomodoro2))
            .apply(PlanEdit::ToggleReview(1));
        assert!(plan.flag(Flag::Pomodoro2));
        assert_eq!(plan.reviews(), [false, true, false]);

        let back = plan
            .apply(PlanEdit::ToggleFlag(Flag::Pomodoro2))
            .apply(PlanEdit::ToggleReview(1));
        assert_eq!(back, Plan::default());
    }

    #[test]
    fn friend_edits_touch_only_their_row() {
        let plan = Plan::default()
            .apply(PlanEdit::AddFriend)
            .apply(PlanEdit::SetFriendName {
                index: 1,
                name: "Sam".into(),
            })
            .apply(PlanEdit::SetFriendTrait {
                index: 1,
                friend_trait: FriendTrait::Trust,
                value: true,
            })
            .apply(PlanEdit::SetFriendEnergy {
                index: 1,
                energy: FriendEnergy::Amplifier,
            });
        assert_eq!(plan.friends()[0], Friend::default());
        let sam = &plan.friends()[1];
        assert_eq!(sam.name, "Sam");
        assert!(sam.has_trait(FriendTrait::Trust));
        assert!(!sam.has_trait(FriendTrait::Growth));
        assert_eq!(sam.energy, FriendEnergy::Amplifier);
    }
}
