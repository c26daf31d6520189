use thiserror::Error;

/// Everything that can end a pipeline run.
///
/// None of these are recovered from inside the library. A failing document
/// aborts the remaining queue, and a failing notification only costs the
/// success confirmation because it happens after the data work is done.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("catalog API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("storage error on {key}: {message}")]
    Storage { key: String, message: String },

    #[error("blob not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("malformed raw document {key}: {source}")]
    Document {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv serialization failed: {0}")]
    Csv(String),

    #[error("archived copy of {0} does not match the source body")]
    ArchiveMismatch(String),

    #[error("notification failed: {0}")]
    Notify(String),
}

impl EtlError {
    pub(crate) fn storage(key: impl Into<String>, err: impl std::fmt::Display) -> Self {
        EtlError::Storage {
            key: key.into(),
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for EtlError {
    fn from(err: csv::Error) -> Self {
        EtlError::Csv(err.to_string())
    }
}
