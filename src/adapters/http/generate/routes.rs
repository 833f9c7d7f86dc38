//! Route configuration for advice generation.

use axum::{routing::post, Router};

use super::handlers::{generate_advice, GenerateAppState};

/// Routes:
/// - `POST /api/generate` - Generate advice (falls back on any failure)
pub fn generate_routes(state: GenerateAppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate_advice))
        .with_state(state)
}
