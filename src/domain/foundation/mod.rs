//! Foundation module - Shared domain primitives.
//!
//! Value objects, error types and the state machine trait used across
//! the check-in and advice domains.

mod calendar;
mod errors;
mod state_machine;
mod timestamp;

pub use calendar::{CalendarDay, TimeOfDay};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
