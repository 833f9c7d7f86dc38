//! The one interaction a user completes on a given day.

use serde::{Deserialize, Serialize};

use super::interaction::{InteractionPayload, InteractionType};
use crate::domain::foundation::{CalendarDay, Timestamp, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyInteractionRecord {
    date: CalendarDay,
    interaction_type: InteractionType,
    payload: InteractionPayload,
    timestamp: Timestamp,
}

impl DailyInteractionRecord {
    pub fn new(
        date: CalendarDay,
        payload: InteractionPayload,
        timestamp: Timestamp,
    ) -> Result<Self, ValidationError> {
        payload.validate()?;
        let interaction_type = payload
            .interaction_type()
            .ok_or_else(|| ValidationError::invalid_format("type", "unknown interaction"))?;

        Ok(Self {
            date,
            interaction_type,
            payload,
            timestamp,
        })
    }

    pub fn date(&self) -> CalendarDay {
        self.date
    }

    pub fn interaction_type(&self) -> InteractionType {
        self.interaction_type
    }

    pub fn payload(&self) -> &InteractionPayload {
        &self.payload
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> CalendarDay {
        CalendarDay::from_ymd(2024, 6, 1).unwrap()
    }

    #[test]
    fn derives_type_from_payload() {
        let record = DailyInteractionRecord::new(
            day(),
            InteractionPayload::Choice {
                id: "space".into(),
                choice: "indoor".into(),
            },
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(record.interaction_type(), InteractionType::Choice);
        assert_eq!(record.date(), day());
    }

    #[test]
    fn rejects_unknown_payload() {
        let result = DailyInteractionRecord::new(day(), InteractionPayload::Unknown, Timestamp::now());
        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_camel_case_type_field() {
        let record = DailyInteractionRecord::new(
            day(),
            InteractionPayload::Slider {
                id: "battery".into(),
                label: String::new(),
                value: 80,
            },
            Timestamp::now(),
        )
        .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["interactionType"], "slider");
        assert_eq!(json["payload"]["value"], 80);
    }
}
