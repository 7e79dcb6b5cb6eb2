//! Typed failure produced by the outbound client.

use std::error::Error as StdError;
use thiserror::Error;

use crate::errors::ErrorCode;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A request the client could not complete.
///
/// Immutable once built; consumed by the response relay.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct ClientFailure {
    code: ErrorCode,
    message: String,
    #[source]
    cause: Option<BoxError>,
}

impl ClientFailure {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the underlying error.
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Failure message, empty when none was given.
    pub fn message(&self) -> &str {
        &self.message
    }
}
