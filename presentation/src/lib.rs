//! Presentation layer for oathwright
//!
//! This crate owns everything the user sees: the clap CLI definition, the
//! interactive form that collects missing brief fields, console output
//! formatting, and the generation spinner.

pub mod cli;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use form::prompter::{FormPrompter, FormSeeds, PrompterError};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::GenerationSpinner;
