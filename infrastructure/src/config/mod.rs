//! Configuration loading and validation

pub mod file_config;
pub mod loader;
pub mod settings;

pub use file_config::{ConfigValidationError, FileConfig};
pub use loader::ConfigLoader;
pub use settings::{BackendSettings, SettingsError};
