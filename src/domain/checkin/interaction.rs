//! Daily micro-interactions: what the user is offered and what they answer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Upper bound of a slider reading.
pub const SLIDER_MAX: u8 = 100;

/// The three kinds of daily interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Slider,
    Choice,
    Senses,
}

impl InteractionType {
    pub const ALL: [InteractionType; 3] = [
        InteractionType::Slider,
        InteractionType::Choice,
        InteractionType::Senses,
    ];
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InteractionType::Slider => "slider",
            InteractionType::Choice => "choice",
            InteractionType::Senses => "senses",
        };
        f.write_str(s)
    }
}

/// The user's answer to a daily interaction, tagged by `type`.
///
/// Unrecognised tags land in `Unknown` instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InteractionPayload {
    Slider {
        #[serde(default)]
        id: String,
        #[serde(default)]
        label: String,
        value: u8,
    },
    Choice {
        #[serde(default)]
        id: String,
        choice: String,
    },
    Senses {
        sense: String,
        choice: String,
    },
    #[serde(other)]
    Unknown,
}

impl InteractionPayload {
    pub fn interaction_type(&self) -> Option<InteractionType> {
        match self {
            InteractionPayload::Slider { .. } => Some(InteractionType::Slider),
            InteractionPayload::Choice { .. } => Some(InteractionType::Choice),
            InteractionPayload::Senses { .. } => Some(InteractionType::Senses),
            InteractionPayload::Unknown => None,
        }
    }

    /// Human label of a slider: the explicit one, else the catalog label for its id.
    pub fn slider_label(&self) -> Option<String> {
        match self {
            InteractionPayload::Slider { id, label, .. } => {
                if !label.is_empty() {
                    Some(label.clone())
                } else {
                    Some(
                        find_slider(id)
                            .map(|s| s.label.to_string())
                            .unwrap_or_else(|| id.clone()),
                    )
                }
            }
            _ => None,
        }
    }

    /// Checks the payload is something a daily record can hold.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            InteractionPayload::Slider { value, .. } => {
                if *value > SLIDER_MAX {
                    return Err(ValidationError::out_of_range(
                        "value",
                        0,
                        SLIDER_MAX as i32,
                        *value as i32,
                    ));
                }
                Ok(())
            }
            InteractionPayload::Choice { choice, .. } => {
                if choice.trim().is_empty() {
                    return Err(ValidationError::empty_field("choice"));
                }
                Ok(())
            }
            InteractionPayload::Senses { sense, choice } => {
                if sense.trim().is_empty() {
                    return Err(ValidationError::empty_field("sense"));
                }
                if choice.trim().is_empty() {
                    return Err(ValidationError::empty_field("choice"));
                }
                Ok(())
            }
            InteractionPayload::Unknown => Err(ValidationError::invalid_format(
                "type",
                "expected one of slider, choice, senses",
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub text: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceSpec {
    pub id: &'static str,
    pub prompt: &'static str,
    pub left: OptionSpec,
    pub right: OptionSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SenseSpec {
    pub sense: &'static str,
    pub question: &'static str,
    pub options: [OptionSpec; 4],
}

pub const SLIDERS: [SliderSpec; 2] = [
    SliderSpec {
        id: "weather",
        label: "内心天气",
        left: "大雨",
        right: "艳阳",
    },
    SliderSpec {
        id: "battery",
        label: "内心电量",
        left: "0%",
        right: "100%",
    },
];

pub const CHOICES: [ChoiceSpec; 2] = [
    ChoiceSpec {
        id: "space",
        prompt: "今天的感觉是...",
        left: OptionSpec {
            text: "想躲在被窝听雨",
            value: "indoor",
        },
        right: OptionSpec {
            text: "想在旷野奔跑",
            value: "outdoor",
        },
    },
    ChoiceSpec {
        id: "social",
        prompt: "今天的感觉是...",
        left: OptionSpec {
            text: "想一个人静静",
            value: "alone",
        },
        right: OptionSpec {
            text: "想和朋友分享",
            value: "social",
        },
    },
];

pub const SENSES: [SenseSpec; 2] = [
    SenseSpec {
        sense: "smell",
        question: "如果现在有一种味道，你希望是：",
        options: [
            OptionSpec { text: "苦橙", value: "orange" },
            OptionSpec { text: "泥土", value: "earth" },
            OptionSpec { text: "肉桂", value: "cinnamon" },
            OptionSpec { text: "海盐", value: "salt" },
        ],
    },
    SenseSpec {
        sense: "touch",
        question: "想触碰的质感：",
        options: [
            OptionSpec { text: "柔软羊毛", value: "wool" },
            OptionSpec { text: "光滑木头", value: "wood" },
            OptionSpec { text: "冰凉金属", value: "metal" },
            OptionSpec { text: "温暖陶瓷", value: "ceramic" },
        ],
    },
];

pub fn find_slider(id: &str) -> Option<&'static SliderSpec> {
    SLIDERS.iter().find(|s| s.id == id)
}

/// What the user is shown today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InteractionPrompt {
    Slider { slider: SliderSpec },
    Choice { choice: ChoiceSpec },
    Senses { senses: SenseSpec },
}

impl InteractionPrompt {
    /// Draws a type, then one entry of that type's catalog.
    ///
    /// `pick(n)` must return an index in `0..n`.
    pub fn draw(mut pick: impl FnMut(usize) -> usize) -> Self {
        let kind = InteractionType::ALL[pick(InteractionType::ALL.len())];
        match kind {
            InteractionType::Slider => InteractionPrompt::Slider {
                slider: SLIDERS[pick(SLIDERS.len())],
            },
            InteractionType::Choice => InteractionPrompt::Choice {
                choice: CHOICES[pick(CHOICES.len())],
            },
            InteractionType::Senses => InteractionPrompt::Senses {
                senses: SENSES[pick(SENSES.len())],
            },
        }
    }

    pub fn interaction_type(&self) -> InteractionType {
        match self {
            InteractionPrompt::Slider { .. } => InteractionType::Slider,
            InteractionPrompt::Choice { .. } => InteractionType::Choice,
            InteractionPrompt::Senses { .. } => InteractionType::Senses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slider_payload_from_client_shape() {
        let json = r#"{"type":"slider","id":"battery","value":42}"#;
        let payload: InteractionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(
            payload,
            InteractionPayload::Slider {
                id: "battery".into(),
                label: String::new(),
                value: 42
            }
        );
        assert_eq!(payload.slider_label().as_deref(), Some("内心电量"));
    }

    #[test]
    fn explicit_slider_label_wins() {
        let payload = InteractionPayload::Slider {
            id: "battery".into(),
            label: "精力".into(),
            value: 10,
        };
        assert_eq!(payload.slider_label().as_deref(), Some("精力"));
    }

    #[test]
    fn unknown_type_tag_is_tolerated() {
        let json = r#"{"type":"dance","moves":3}"#;
        let payload: InteractionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload, InteractionPayload::Unknown);
        assert_eq!(payload.interaction_type(), None);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn senses_payload_round_trips_with_type_tag() {
        let payload = InteractionPayload::Senses {
            sense: "smell".into(),
            choice: "orange".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "senses");
        assert_eq!(json["sense"], "smell");
        assert_eq!(payload.interaction_type(), Some(InteractionType::Senses));
    }

    #[test]
    fn slider_above_range_is_rejected() {
        let payload = InteractionPayload::Slider {
            id: "weather".into(),
            label: String::new(),
            value: 101,
        };
        assert!(matches!(
            payload.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn blank_choice_is_rejected() {
        let payload = InteractionPayload::Choice {
            id: "space".into(),
            choice: "  ".into(),
        };
        assert_eq!(payload.validate(), Err(ValidationError::empty_field("choice")));
    }

    #[test]
    fn draw_follows_picks() {
        let mut picks = vec![2, 1].into_iter();
        let prompt = InteractionPrompt::draw(|_| picks.next().unwrap_or(0));
        assert_eq!(prompt, InteractionPrompt::Senses { senses: SENSES[1] });
        assert_eq!(prompt.interaction_type(), InteractionType::Senses);
    }

    #[test]
    fn drawn_prompt_serializes_with_type_tag() {
        let prompt = InteractionPrompt::draw(|_| 0);
        let json = serde_json::to_value(prompt).unwrap();
        assert_eq!(json["type"], "slider");
        assert_eq!(json["slider"]["label"], "内心天气");
    }

    #[test]
    fn every_sense_offers_four_options() {
        for sense in SENSES.iter() {
            assert_eq!(sense.options.len(), 4);
        }
    }
}
