//! Advice value types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{CalendarDay, Timestamp};

/// Three short reflective messages, one per layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    #[serde(default)]
    pub physical: String,
    #[serde(default)]
    pub sensory: String,
    #[serde(default)]
    pub awareness: String,
}

impl Advice {
    pub fn new(
        physical: impl Into<String>,
        sensory: impl Into<String>,
        awareness: impl Into<String>,
    ) -> Self {
        Self {
            physical: physical.into(),
            sensory: sensory.into(),
            awareness: awareness.into(),
        }
    }

    /// True when every layer has text.
    pub fn is_complete(&self) -> bool {
        !self.physical.trim().is_empty()
            && !self.sensory.trim().is_empty()
            && !self.awareness.trim().is_empty()
    }
}

/// Where a piece of advice came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceSource {
    Model,
    Fallback,
}

impl fmt::Display for AdviceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdviceSource::Model => f.write_str("model"),
            AdviceSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// Advice cached for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResult {
    pub date: CalendarDay,
    #[serde(flatten)]
    pub advice: Advice,
    pub source: AdviceSource,
    pub timestamp: Timestamp,
}

impl AdviceResult {
    pub fn new(date: CalendarDay, advice: Advice, source: AdviceSource, timestamp: Timestamp) -> Self {
        Self {
            date,
            advice,
            source,
            timestamp,
        }
    }
}
