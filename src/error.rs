use thiserror::Error;

/// Failures that stop a generation run before any file is written.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("translation store contains no languages")]
    EmptyStore,

    #[error("default language '{0}' is not present in the translations")]
    UnknownDefaultLanguage(String),

    #[error("language '{0}' is not present in the translations")]
    UnknownLanguage(String),

    #[error("translation '{code}' is invalid: {source}")]
    InvalidRecord {
        code: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("validation failed with {} error(s):\n  - {}", .errors.len(), .errors.join("\n  - "))]
    Validation { errors: Vec<String> },
}
