//! HTTP handlers for check-in endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::{SessionOrchestrator, SessionView};
use crate::domain::checkin::ONBOARDING_ITEMS;
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{
    CompleteInteractionRequest, CompleteOnboardingRequest, ErrorResponse, ItemResponse,
    SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CheckInAppState {
    pub orchestrator: Arc<SessionOrchestrator>,
}

impl CheckInAppState {
    pub fn new(orchestrator: Arc<SessionOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/session - Current state for today
pub async fn get_session(State(state): State<CheckInAppState>) -> Response {
    session_response(state.orchestrator.resolve().await)
}

/// POST /api/onboarding - Save the chosen items
pub async fn complete_onboarding(
    State(state): State<CheckInAppState>,
    Json(req): Json<CompleteOnboardingRequest>,
) -> Response {
    session_response(state.orchestrator.complete_onboarding(req.items).await)
}

/// GET /api/interaction - Draw today's interaction
pub async fn draw_interaction(State(state): State<CheckInAppState>) -> Response {
    (StatusCode::OK, Json(state.orchestrator.draw_interaction())).into_response()
}

/// POST /api/interaction - Submit today's interaction and receive advice
pub async fn complete_interaction(
    State(state): State<CheckInAppState>,
    Json(req): Json<CompleteInteractionRequest>,
) -> Response {
    session_response(state.orchestrator.complete_interaction(req.interaction).await)
}

/// POST /api/reset - Forget today's check-in
pub async fn reset_day(State(state): State<CheckInAppState>) -> Response {
    session_response(state.orchestrator.reset_day().await)
}

/// DELETE /api/session - Forget everything, back to onboarding
pub async fn clear_all(State(state): State<CheckInAppState>) -> Response {
    session_response(state.orchestrator.clear_all().await)
}

/// GET /api/items - Onboarding catalog
pub async fn list_items() -> Response {
    let items: Vec<ItemResponse> = ONBOARDING_ITEMS.iter().map(ItemResponse::from).collect();
    (StatusCode::OK, Json(items)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn session_response(result: Result<SessionView, DomainError>) -> Response {
    match result {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(view))).into_response(),
        Err(e) => handle_checkin_error(e),
    }
}

pub fn handle_checkin_error(error: DomainError) -> Response {
    let status = match error.code() {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound | ErrorCode::PreferencesNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition | ErrorCode::AlreadyCheckedIn | ErrorCode::Conflict => {
            StatusCode::CONFLICT
        }
        ErrorCode::StorageError | ErrorCode::InternalError => {
            error!(error = %error, "Check-in request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An unexpected error occurred")),
            )
                .into_response();
        }
    };

    (status, Json(ErrorResponse::from(error))).into_response()
}
