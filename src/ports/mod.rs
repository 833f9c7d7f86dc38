//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text generation (Gemini, mock)
//! - `CheckInRepository` - Preferences, daily records, advice cache
//! - `ChoiceSource` - Injectable randomness
//! - `Clock` - Local wall-clock time

mod ai_provider;
mod checkin_repository;
mod choice_source;
mod clock;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};
pub use checkin_repository::{CheckInRepository, RepositoryError};
pub use choice_source::ChoiceSource;
pub use clock::Clock;
