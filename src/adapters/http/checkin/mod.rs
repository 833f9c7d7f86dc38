//! HTTP adapter for the daily check-in session.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CompleteInteractionRequest, CompleteOnboardingRequest, ErrorResponse, ItemResponse,
    SessionResponse,
};
pub use handlers::{handle_checkin_error, CheckInAppState};
pub use routes::checkin_routes;
