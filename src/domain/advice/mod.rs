//! Advice domain: prompt text, model output parsing and canned fallbacks.

mod advice;
mod errors;
mod extractor;
mod fallback;
mod prompt;

pub use advice::{Advice, AdviceResult, AdviceSource};
pub use errors::AdviceError;
pub use extractor::{extract_advice, find_json_object};
pub use fallback::{fallback_pool, pick_fallback};
pub use prompt::{build_prompt, describe_items, interaction_context};
