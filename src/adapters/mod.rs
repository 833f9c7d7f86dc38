//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Gemini and mock text generation
//! - `clock` - System and fixed clocks
//! - `http` - axum routers
//! - `random` - Seeded and scripted choice sources
//! - `storage` - In-memory and JSON-file check-in repositories

pub mod ai;
pub mod clock;
pub mod http;
pub mod random;
pub mod storage;
