use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptive attributes of a recorded action
///
/// Purely informational: who did what, when and why. The traversal
/// algorithm never consults it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionMetadata {
    pub created_by: String,
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub user_intent: String,
    /// Extension fields, flattened next to the well-known ones when serialized
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ActionMetadata {
    /// Metadata stamped with the current time
    pub fn new(created_by: impl Into<String>) -> Self {
        Self {
            created_by: created_by.into(),
            created_on: Utc::now(),
            tags: Vec::new(),
            user_intent: String::new(),
            extra: HashMap::new(),
        }
    }

    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.user_intent = intent.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl Default for ActionMetadata {
    fn default() -> Self {
        Self::new("unknown")
    }
}
