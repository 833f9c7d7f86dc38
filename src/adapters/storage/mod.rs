//! Storage Adapters
//!
//! Implementations of the CheckInRepository port.
//!
//! ## Available Adapters
//!
//! - **FileCheckInRepository** - JSON files on disk
//! - **InMemoryCheckInRepository** - Process memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! let repository = FileCheckInRepository::new("./data");
//! let repository = InMemoryCheckInRepository::new();
//! ```

mod file_checkin_repository;
mod in_memory_checkin_repository;

pub use file_checkin_repository::FileCheckInRepository;
pub use in_memory_checkin_repository::InMemoryCheckInRepository;
