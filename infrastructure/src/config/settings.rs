//! Resolved backend settings
//!
//! Credentials are read from the environment once at startup and carried
//! in [`BackendSettings`]; adapters never read process state themselves.

use super::file_config::FileConfig;
use crate::providers::{BackendKind, GeminiGenerator, OpenAiGenerator};
use thiserror::Error;

/// Errors resolving backend settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{var} is not set (required for the {backend} backend)")]
    MissingCredential {
        var: &'static str,
        backend: BackendKind,
    },
}

/// Everything an adapter constructor needs: backend kind, model name,
/// and the API credential.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub kind: BackendKind,
    pub model: String,
    pub api_key: String,
}

impl BackendSettings {
    /// Resolve settings from the loaded config and the process environment.
    pub fn from_config(config: &FileConfig) -> Result<Self, SettingsError> {
        Self::from_config_with_lookup(config, |var| std::env::var(var).ok())
    }

    /// Resolve with an explicit credential lookup (for tests).
    pub fn from_config_with_lookup(
        config: &FileConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let kind = config.backend.kind;
        let (var, default_model) = match kind {
            BackendKind::Gemini => ("GEMINI_API_KEY", GeminiGenerator::DEFAULT_MODEL),
            BackendKind::OpenAi => ("OPENAI_API_KEY", OpenAiGenerator::DEFAULT_MODEL),
        };

        let api_key = lookup(var)
            .filter(|key| !key.trim().is_empty())
            .ok_or(SettingsError::MissingCredential { var, backend: kind })?;

        let model = config
            .backend
            .model
            .clone()
            .unwrap_or_else(|| default_model.to_string());

        Ok(Self {
            kind,
            model,
            api_key,
        })
    }
}
