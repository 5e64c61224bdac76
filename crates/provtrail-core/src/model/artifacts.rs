use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Open-ended key/value bag attached to a state node
///
/// Holds whatever the application wants to remember about a state
/// (screenshots, view settings, annotations). Traversal never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Artifacts {
    data: HashMap<String, serde_json::Value>,
}

impl Artifacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Insert or replace an artifact, returning the previous value
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Option<serde_json::Value> {
        self.data.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<HashMap<String, serde_json::Value>> for Artifacts {
    fn from(data: HashMap<String, serde_json::Value>) -> Self {
        Self { data }
    }
}
