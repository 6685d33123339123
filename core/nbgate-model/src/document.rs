use crate::Notebook;
use nbgate_types::{DocumentId, Requester};
use serde::{Deserialize, Serialize};

/// Document type tag for saved notebooks.
pub const NOTEBOOK_DOC_TYPE: &str = "notebook";

/// A persisted document owned by one user.
///
/// `data` holds the full client payload; it is replaced wholesale on every
/// save, with no merge and no version history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub doc_type: String,
    pub owner: String,
    pub data: serde_json::Value,
    pub created_at: i64,
    pub modified_at: i64,
}

impl Document {
    /// A fresh, unsaved document with empty data.
    pub fn new(name: impl Into<String>, doc_type: impl Into<String>, owner: &Requester) -> Self {
        let now = now_millis();
        Self {
            id: DocumentId::new(),
            name: name.into(),
            doc_type: doc_type.into(),
            owner: owner.name().to_string(),
            data: serde_json::Value::Object(Default::default()),
            created_at: now,
            modified_at: now,
        }
    }

    /// Replaces the stored content with the full notebook structure.
    pub fn update_data(&mut self, notebook: &Notebook) {
        self.data = notebook.to_value();
        self.modified_at = now_millis();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.modified_at = now_millis();
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
