//! Error types for eden

use thiserror::Error;

/// Result type alias for eden operations
pub type EdenResult<T> = Result<T, EdenError>;

/// Error types for builder validation and Twitter API calls
#[derive(Debug, Error)]
pub enum EdenError {
    /// Builder state is invalid (bad identifier, empty SET, bad argument)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint URL could not be built
    #[cfg(feature = "twitter")]
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP request failed
    #[cfg(feature = "twitter")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Twitter API returned a non-success status
    #[error("Twitter API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        code: Option<i32>,
    },

    /// Twitter API answered 429
    #[error("Rate limited (reset at {reset:?})")]
    RateLimited { reset: Option<u64> },
}

impl EdenError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Check if this is an API error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            #[cfg(feature = "twitter")]
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// First invalid argument seen by a builder setter.
///
/// Setters never fail; they record here and the builder's `validate()`
/// reports the message before any SQL or request leaves the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildError(Option<String>);

impl BuildError {
    /// Keep `message` unless an earlier error was already recorded.
    pub fn record(&mut self, message: impl Into<String>) {
        if self.0.is_none() {
            self.0 = Some(message.into());
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// `Err(Validation)` carrying the recorded message, if any.
    pub fn check(&self) -> EdenResult<()> {
        match &self.0 {
            Some(message) => Err(EdenError::validation(message.clone())),
            None => Ok(()),
        }
    }
}
