//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::advice::{
    AdviceGeneratorConfig, GenerateAdviceCommand, GenerateAdviceHandler, GenerateAdviceResult,
};
pub use handlers::checkin::{SessionOrchestrator, SessionView};
