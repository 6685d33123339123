use crate::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single executable unit within a notebook.
///
/// Only `type` is interpreted here; it selects the execution adapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snippet(Map<String, Value>);

impl Snippet {
    /// Decodes a snippet from the JSON text of a request field.
    pub fn parse(json: &str) -> ModelResult<Self> {
        serde_json::from_str(json).map_err(|source| ModelError::InvalidPayload {
            field: "snippet",
            source,
        })
    }

    /// The backend type tag (`hive`, `text`, ...). Empty tags count as absent.
    pub fn snippet_type(&self) -> Option<&str> {
        self.0
            .get("type")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    /// Top-level field lookup, for adapters that keep handles in the snippet.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Snippet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
