//! Randomness Adapters
//!
//! - **SeededChoiceSource** - `rand::StdRng`, seeded or from entropy
//! - **ScriptedChoiceSource** - Fixed pick sequence for tests and demos

mod seeded_choice_source;

pub use seeded_choice_source::{ScriptedChoiceSource, SeededChoiceSource};
