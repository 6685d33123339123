//! The notebook payload and its view over a persisted document.

use crate::{Document, ModelError, ModelResult};
use nbgate_types::DocumentId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A client-authored notebook: an opaque JSON object grouping snippets.
///
/// The gateway reads only `id` and `name`; the full object is what gets
/// persisted on save and handed to adapters on execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notebook(Map<String, Value>);

impl Notebook {
    /// Decodes a notebook from the JSON text of a request field.
    pub fn parse(json: &str) -> ModelResult<Self> {
        serde_json::from_str(json).map_err(|source| ModelError::InvalidPayload {
            field: "notebook",
            source,
        })
    }

    /// Builds the notebook view of a stored document.
    ///
    /// The stored data is returned with `id` set to the document id, so a
    /// client that re-saves the notebook updates the same document.
    pub fn from_document(document: &Document) -> ModelResult<Self> {
        let Value::Object(mut data) = document.data.clone() else {
            return Err(ModelError::CorruptDocument(document.id.to_string()));
        };
        data.insert("id".into(), Value::String(document.id.to_string()));
        Ok(Self(data))
    }

    /// The persisted document this notebook was saved as, if any.
    ///
    /// Absent, `null` and empty-string ids all mean "not saved yet".
    pub fn document_id(&self) -> ModelResult<Option<DocumentId>> {
        match self.0.get("id") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => DocumentId::parse(s)
                .map(Some)
                .map_err(|_| ModelError::InvalidDocumentId(s.clone())),
            Some(other) => Err(ModelError::InvalidDocumentId(other.to_string())),
        }
    }

    /// The notebook's display name, empty when unset.
    pub fn name(&self) -> &str {
        self.0.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    /// Exported JSON text of the notebook, as returned to clients on open.
    pub fn to_json_string(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for Notebook {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
