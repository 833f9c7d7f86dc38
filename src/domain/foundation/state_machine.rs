//! State machine trait for lifecycle enums.
//!
//! Implementors list their legal transitions once and get a validated
//! `transition_to` for free.

use super::ValidationError;

/// Trait for enums that model a finite set of states.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for SessionState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Onboarding => vec![DailyInteraction],
///             // ...
///         }
///     }
/// }
///
/// let next = state.transition_to(SessionState::Results)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// All states reachable in one step from self.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Moves to target, failing when the edge does not exist.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// A state with no outgoing edges.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
