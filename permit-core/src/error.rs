//! Error types shared by the resolver and its collaborators.

use thiserror::Error;

/// Failure of a collaborator lookup (geocoding or jurisdiction search).
///
/// A lookup that completes without a match is not an error; collaborators
/// report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum LookupError {
    #[cfg(feature = "api")]
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected response status {0}")]
    Status(u16),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl From<ValidationError> for LookupError {
    fn from(err: ValidationError) -> Self {
        LookupError::InvalidPayload(err.to_string())
    }
}

/// A jurisdiction payload that cannot be rendered or routed to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("jurisdiction is missing `{0}`")]
    MissingField(&'static str),
}

/// Misuse of the resolver's manual-selection path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    #[error("manual jurisdiction selection is only available in manual mode")]
    NotInManualMode,
}

/// A locale or fixture document that could not be parsed.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object at the document root")]
    NotAnObject,
}
