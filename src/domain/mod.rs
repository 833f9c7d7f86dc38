//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, timestamps, calendar days, state machine)
//! - `checkin` - Onboarding items, daily interactions and the session state machine
//! - `advice` - Prompt construction, output extraction and fallback advice

pub mod advice;
pub mod checkin;
pub mod foundation;
