//! Text generator port
//!
//! Defines the interface for communicating with text-generation backends.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a backend generation call
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Request rejected by backend: {0}")]
    Rejected(String),

    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("Backend returned no text")]
    EmptyResponse,

    #[error("Authentication failed: {0}")]
    Authentication(String),
}

impl GeneratorError {
    /// Terminal errors are never retried. A bad credential stays bad no
    /// matter how often the same prompt is re-sent.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GeneratorError::Authentication(_))
    }
}

/// Capability interface for text generation
///
/// This port defines how the application layer talks to a generation
/// backend. Implementations (adapters) live in the infrastructure layer;
/// tests substitute mocks. A backend is treated as a pure (if flaky)
/// function of the prompt, so re-issuing the identical prompt is safe.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend name (e.g. "gemini", "openai")
    fn name(&self) -> &str;

    /// Submit a prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
