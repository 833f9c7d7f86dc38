//! HTTP adapter for the stateless advice generation endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{AdviceResponse, GenerateAdviceRequest, GenerateErrorResponse};
pub use handlers::{generate_advice, GenerateAppState};
pub use routes::generate_routes;
