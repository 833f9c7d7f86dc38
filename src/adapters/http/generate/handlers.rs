//! HTTP handler for advice generation.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::application::GenerateAdviceHandler;
use crate::domain::advice::{Advice, AdviceSource};

use super::dto::{AdviceResponse, GenerateAdviceRequest, GenerateErrorResponse};

#[derive(Clone)]
pub struct GenerateAppState {
    pub generator: Arc<GenerateAdviceHandler>,
}

impl GenerateAppState {
    pub fn new(generator: Arc<GenerateAdviceHandler>) -> Self {
        Self { generator }
    }
}

/// POST /api/generate - Generate three-layer advice for one interaction
///
/// 200 with model advice, or 500 with fallback advice in the body. A body
/// that does not decode is a failure like any other and gets fallback too.
pub async fn generate_advice(
    State(state): State<GenerateAppState>,
    payload: Result<Json<GenerateAdviceRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected generate request, using fallback");
            return fallback_response(state.generator.fallback());
        }
    };

    let result = state.generator.handle(req.into()).await;

    match result.source {
        AdviceSource::Model => {
            (StatusCode::OK, Json(AdviceResponse::from(result.advice))).into_response()
        }
        AdviceSource::Fallback => fallback_response(result.advice),
    }
}

fn fallback_response(advice: Advice) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(GenerateErrorResponse::with_fallback(advice)),
    )
        .into_response()
}
