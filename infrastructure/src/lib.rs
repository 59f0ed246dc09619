//! Infrastructure layer for oathwright
//!
//! This crate contains the adapters that talk to hosted text-generation
//! backends and the configuration loading machinery. Both implement the
//! ports defined in the application layer.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    file_config::{ConfigValidationError, FileConfig},
    loader::ConfigLoader,
    settings::{BackendSettings, SettingsError},
};
pub use providers::{BackendKind, GeminiGenerator, OpenAiGenerator, build_generator};
