use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Payload was not valid JSON or not a JSON object.
    #[error("invalid {field} payload: {source}")]
    InvalidPayload {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The notebook carried an `id` that is not a document id.
    #[error("invalid notebook id: {0}")]
    InvalidDocumentId(String),

    /// Stored document data is not a JSON object.
    #[error("document {0} does not hold a notebook object")]
    CorruptDocument(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
