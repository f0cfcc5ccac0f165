//! Error types for BullyGuard
//!
//! Display strings for the request-path variants are user-facing: the web
//! layer renders them verbatim into the result page.

/// Result type alias using BullyGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for BullyGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input was empty or whitespace-only; nothing was classified
    #[error("Please enter some text to classify.")]
    EmptyInput,

    /// Text could not be turned into a feature vector
    #[error("Vectorization error: {0}")]
    Vectorize(String),

    /// No classifier model was loaded at startup
    #[error("Model not available on server.")]
    ModelUnavailable,

    /// Prediction failures
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// Artifact loading errors
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new vectorization error
    pub fn vectorize(msg: impl Into<String>) -> Self {
        Self::Vectorize(msg.into())
    }

    /// Create a new prediction error
    pub fn prediction(msg: impl Into<String>) -> Self {
        Self::Prediction(msg.into())
    }

    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }
}
