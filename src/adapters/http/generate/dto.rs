//! HTTP DTOs for advice generation.

use serde::{Deserialize, Serialize};

use crate::application::GenerateAdviceCommand;
use crate::domain::advice::Advice;
use crate::domain::checkin::InteractionPayload;
use crate::domain::foundation::TimeOfDay;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAdviceRequest {
    #[serde(default)]
    pub user_items: Vec<String>,
    pub daily_interaction: InteractionPayload,
    pub time_of_day: TimeOfDay,
    #[serde(default)]
    pub seed: Option<u32>,
}

impl From<GenerateAdviceRequest> for GenerateAdviceCommand {
    fn from(req: GenerateAdviceRequest) -> Self {
        Self {
            items: req.user_items,
            interaction: req.daily_interaction,
            time_of_day: req.time_of_day,
            seed: req.seed,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub physical: String,
    pub sensory: String,
    pub awareness: String,
}

impl From<Advice> for AdviceResponse {
    fn from(advice: Advice) -> Self {
        Self {
            physical: advice.physical,
            sensory: advice.sensory,
            awareness: advice.awareness,
        }
    }
}

/// Failure body. Still carries usable advice so the client never renders empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateErrorResponse {
    pub error: String,
    pub fallback: AdviceResponse,
}

impl GenerateErrorResponse {
    pub const MESSAGE: &'static str = "Failed to generate advice";

    pub fn with_fallback(fallback: Advice) -> Self {
        Self {
            error: Self::MESSAGE.to_string(),
            fallback: fallback.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_camel_case_fields() {
        let json = r#"{
            "userItems": ["lantern", "radio"],
            "dailyInteraction": {"type": "slider", "id": "battery", "label": "内心电量", "value": 42},
            "timeOfDay": "morning",
            "seed": 7
        }"#;
        let req: GenerateAdviceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_items, vec!["lantern", "radio"]);
        assert_eq!(req.time_of_day, TimeOfDay::Morning);
        assert_eq!(req.seed, Some(7));

        let cmd: GenerateAdviceCommand = req.into();
        assert_eq!(cmd.items.len(), 2);
        assert!(matches!(cmd.interaction, InteractionPayload::Slider { value: 42, .. }));
    }

    #[test]
    fn request_tolerates_missing_items_and_seed() {
        let json = r#"{"dailyInteraction": {"type": "dance"}, "timeOfDay": "evening"}"#;
        let req: GenerateAdviceRequest = serde_json::from_str(json).unwrap();
        assert!(req.user_items.is_empty());
        assert_eq!(req.seed, None);
        assert_eq!(req.daily_interaction, InteractionPayload::Unknown);
    }

    #[test]
    fn error_response_serializes_with_fallback() {
        let body = GenerateErrorResponse::with_fallback(Advice::new("a", "b", "c"));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["error"], "Failed to generate advice");
        assert_eq!(value["fallback"]["sensory"], "b");
    }
}
