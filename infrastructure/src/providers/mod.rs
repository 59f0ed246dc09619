//! Backend adapters for text generation
//!
//! Each adapter implements the application-layer [`TextGenerator`] port.
//! The two backends are mutually exclusive alternatives selected at
//! deployment time via [`BackendKind`]; the rest of the system is
//! indifferent to which one is configured.

pub mod gemini;
pub mod openai;

pub use gemini::GeminiGenerator;
pub use openai::OpenAiGenerator;

use crate::config::settings::BackendSettings;
use oath_application::ports::text_generator::{GeneratorError, TextGenerator};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which hosted backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Google Gemini (default, matches the original deployment)
    #[default]
    Gemini,
    /// OpenAI chat completions
    OpenAi,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Gemini => write!(f, "gemini"),
            BackendKind::OpenAi => write!(f, "openai"),
        }
    }
}

/// Build the configured generator behind the port.
pub fn build_generator(settings: &BackendSettings) -> Arc<dyn TextGenerator> {
    match settings.kind {
        BackendKind::Gemini => Arc::new(GeminiGenerator::new(
            settings.api_key.clone(),
            settings.model.clone(),
        )),
        BackendKind::OpenAi => Arc::new(OpenAiGenerator::new(
            settings.api_key.clone(),
            settings.model.clone(),
        )),
    }
}

/// Map a non-success HTTP status to the port error taxonomy.
///
/// 401/403 are terminal; 429 and policy blocks are rejections; everything
/// else (5xx, unexpected 4xx) is reported as the backend being unavailable.
pub(crate) fn status_to_error(status: StatusCode, body: String) -> GeneratorError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GeneratorError::Authentication(format!("HTTP {}: {}", status.as_u16(), body))
        }
        StatusCode::TOO_MANY_REQUESTS => {
            GeneratorError::Rejected(format!("HTTP {}: {}", status.as_u16(), body))
        }
        s if s.is_client_error() => {
            GeneratorError::Rejected(format!("HTTP {}: {}", s.as_u16(), body))
        }
        s => GeneratorError::Unavailable(format!("HTTP {}: {}", s.as_u16(), body)),
    }
}
