//! Generated copy value object

use serde::{Deserialize, Serialize};

/// The successful outcome of a copy generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCopy {
    /// The marketing copy returned by the backend
    pub text: String,
    /// Name of the backend that produced it (e.g. "gemini")
    pub backend: String,
}

impl GeneratedCopy {
    pub fn new(text: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            backend: backend.into(),
        }
    }
}
