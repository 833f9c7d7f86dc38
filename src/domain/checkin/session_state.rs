//! Which screen of the daily ritual the user is on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Onboarding,
    DailyInteraction,
    Results,
}

impl SessionState {
    /// Derives the state from what is persisted.
    pub fn resolve(has_preferences: bool, has_today_record: bool) -> Self {
        match (has_preferences, has_today_record) {
            (false, _) => SessionState::Onboarding,
            (true, false) => SessionState::DailyInteraction,
            (true, true) => SessionState::Results,
        }
    }
}

impl StateMachine for SessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionState::*;
        match self {
            Onboarding => vec![DailyInteraction],
            DailyInteraction => vec![Results],
            // Reset lands in either state depending on whether preferences survive.
            Results => vec![Onboarding, DailyInteraction],
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Onboarding => "onboarding",
            SessionState::DailyInteraction => "daily_interaction",
            SessionState::Results => "results",
        };
        f.write_str(s)
    }
}
