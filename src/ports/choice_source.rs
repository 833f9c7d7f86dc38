//! Choice Source Port - Injectable randomness.

/// Source of uniform picks.
///
/// Interaction draws, fallback selection and the generation seed all go
/// through this trait so tests can pin every random decision.
pub trait ChoiceSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}
