//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::providers::BackendKind;
use oath_application::retry::RetryPolicy;
use oath_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("retry.max_attempts cannot be 0")]
    InvalidAttempts,

    #[error("retry.max_delay_secs cannot be 0")]
    InvalidMaxDelay,

    #[error("retry.min_delay_secs cannot exceed retry.max_delay_secs")]
    InvalidDelayBounds,
}

/// Raw backend configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Which backend to use ("gemini" or "openai")
    pub kind: BackendKind,
    /// Model name override; each backend has its own default
    pub model: Option<String>,
}

/// Raw retry configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Attempt ceiling (including the first attempt)
    pub max_attempts: u32,
    /// Minimum backoff delay in seconds
    pub min_delay_secs: u64,
    /// Maximum backoff delay in seconds
    pub max_delay_secs: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            min_delay_secs: 1,
            max_delay_secs: 60,
        }
    }
}

impl FileRetryConfig {
    /// Convert to the application-layer retry policy.
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_secs(self.min_delay_secs),
            Duration::from_secs(self.max_delay_secs),
        )
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend selection
    pub backend: FileBackendConfig,
    /// Retry settings
    pub retry: FileRetryConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.retry.max_attempts == 0 {
            return Err(ConfigValidationError::InvalidAttempts);
        }

        if self.retry.max_delay_secs == 0 {
            return Err(ConfigValidationError::InvalidMaxDelay);
        }

        if self.retry.min_delay_secs > self.retry.max_delay_secs {
            return Err(ConfigValidationError::InvalidDelayBounds);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
kind = "openai"
model = "gpt-4o"

[retry]
max_attempts = 4
min_delay_secs = 2
max_delay_secs = 30

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.kind, BackendKind::OpenAi);
        assert_eq!(config.backend.model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.retry.max_attempts, 4);
        assert_eq!(config.retry.min_delay_secs, 2);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[backend]
kind = "gemini"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.kind, BackendKind::Gemini);
        assert!(config.backend.model.is_none());
        // Defaults should apply
        assert_eq!(config.retry.max_attempts, 6);
        assert_eq!(config.retry.min_delay_secs, 1);
        assert_eq!(config.retry.max_delay_secs, 60);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.backend.kind, BackendKind::Gemini);
        assert!(config.backend.model.is_none());
        assert!(config.output.format.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_retry_to_policy() {
        let config = FileConfig::default();
        let policy = config.retry.to_policy();
        assert_eq!(policy.max_attempts, 6);
        assert_eq!(policy.min_delay, Duration::from_secs(1));
        assert_eq!(policy.max_delay, Duration::from_secs(60));
    }

    #[test]
    fn test_validate_zero_attempts() {
        let toml_str = r#"
[retry]
max_attempts = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidAttempts)
        ));
    }

    #[test]
    fn test_validate_zero_max_delay() {
        let toml_str = r#"
[retry]
max_delay_secs = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxDelay)
        ));
    }

    #[test]
    fn test_validate_inverted_delay_bounds() {
        let toml_str = r#"
[retry]
min_delay_secs = 90
max_delay_secs = 60
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidDelayBounds)
        ));
    }
}
