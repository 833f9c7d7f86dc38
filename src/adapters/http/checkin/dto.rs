//! HTTP DTOs for check-in endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::SessionView;
use crate::domain::advice::Advice;
use crate::domain::checkin::{InteractionPayload, OnboardingItem, SessionState};
use crate::domain::foundation::{CalendarDay, DomainError};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to finish onboarding with the chosen item tags.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteOnboardingRequest {
    pub items: Vec<String>,
}

/// Request to submit today's interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteInteractionRequest {
    pub interaction: InteractionPayload,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub state: SessionState,
    pub today: CalendarDay,
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub advice: Option<Advice>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_check_in: Option<CalendarDay>,
}

impl From<SessionView> for SessionResponse {
    fn from(view: SessionView) -> Self {
        Self {
            state: view.state,
            today: view.today,
            items: view.items,
            advice: view.advice,
            last_check_in: view.last_check_in,
        }
    }
}

/// One entry of the onboarding catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&OnboardingItem> for ItemResponse {
    fn from(item: &OnboardingItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.to_string(),
            description: item.description.to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn session_response_omits_absent_advice() {
        let response = SessionResponse {
            state: SessionState::Onboarding,
            today: CalendarDay::from_ymd(2024, 7, 15).unwrap(),
            items: vec![],
            advice: None,
            last_check_in: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["state"], "onboarding");
        assert_eq!(value["today"], "2024-07-15");
        assert!(value.get("advice").is_none());
        assert!(value.get("lastCheckIn").is_none());
    }

    #[test]
    fn interaction_request_accepts_tagged_payload() {
        let json = r#"{"interaction": {"type": "senses", "sense": "smell", "choice": "earth"}}"#;
        let req: CompleteInteractionRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(req.interaction, InteractionPayload::Senses { .. }));
    }

    #[test]
    fn error_response_carries_code_and_details() {
        let error = DomainError::new(ErrorCode::AlreadyCheckedIn, "Already checked in today")
            .with_detail("date", "2024-07-15");
        let response = ErrorResponse::from(error);
        assert_eq!(response.code, "ALREADY_CHECKED_IN");
        assert_eq!(response.details.unwrap()["date"], "2024-07-15");
    }

    #[test]
    fn error_response_without_details_skips_field() {
        let response = ErrorResponse::from(DomainError::new(ErrorCode::Conflict, "x"));
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("details").is_none());
    }
}
