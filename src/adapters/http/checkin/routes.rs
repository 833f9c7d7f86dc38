//! Route configuration for check-in endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    clear_all, complete_interaction, complete_onboarding, draw_interaction, get_session,
    list_items, reset_day, CheckInAppState,
};

/// Creates the check-in router.
///
/// Routes:
/// - `GET /api/session` - Current session view
/// - `DELETE /api/session` - Clear all stored state
/// - `POST /api/onboarding` - Complete onboarding
/// - `GET /api/interaction` - Draw today's interaction
/// - `POST /api/interaction` - Submit today's interaction
/// - `POST /api/reset` - Reset today
/// - `GET /api/items` - Onboarding catalog
pub fn checkin_routes(state: CheckInAppState) -> Router {
    Router::new()
        .route("/api/session", get(get_session).delete(clear_all))
        .route("/api/onboarding", post(complete_onboarding))
        .route("/api/interaction", get(draw_interaction).post(complete_interaction))
        .route("/api/reset", post(reset_day))
        .route("/api/items", get(list_items))
        .with_state(state)
}
