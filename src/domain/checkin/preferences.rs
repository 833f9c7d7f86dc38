//! Long-lived user preferences captured at onboarding.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::items::{find_item, REQUIRED_ITEM_COUNT};
use crate::domain::foundation::{Timestamp, ValidationError};

/// The item tags a user chose, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    items: Vec<String>,
    timestamp: Timestamp,
}

impl UserPreferences {
    /// Builds preferences from stored data; accepts zero to three tags.
    pub fn new(items: Vec<String>, timestamp: Timestamp) -> Result<Self, ValidationError> {
        if items.len() > REQUIRED_ITEM_COUNT {
            return Err(ValidationError::out_of_range(
                "items",
                0,
                REQUIRED_ITEM_COUNT as i32,
                items.len() as i32,
            ));
        }
        if items.iter().any(|tag| tag.trim().is_empty()) {
            return Err(ValidationError::empty_field("items"));
        }
        Ok(Self { items, timestamp })
    }

    /// Builds preferences for a completed onboarding.
    ///
    /// Requires exactly three distinct tags taken from the item catalog.
    pub fn onboard(items: Vec<String>, timestamp: Timestamp) -> Result<Self, ValidationError> {
        if items.len() != REQUIRED_ITEM_COUNT {
            return Err(ValidationError::out_of_range(
                "items",
                REQUIRED_ITEM_COUNT as i32,
                REQUIRED_ITEM_COUNT as i32,
                items.len() as i32,
            ));
        }

        let mut seen = HashSet::new();
        for tag in &items {
            if find_item(tag).is_none() {
                return Err(ValidationError::invalid_format(
                    "items",
                    format!("unknown item '{}'", tag),
                ));
            }
            if !seen.insert(tag.as_str()) {
                return Err(ValidationError::invalid_format(
                    "items",
                    format!("item '{}' selected twice", tag),
                ));
            }
        }

        Self::new(items, timestamp)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
