//! Application layer for oathwright
//!
//! This crate contains the copy generation use case, the port definition
//! for text-generation backends, and the retry policy. It depends only on
//! the domain layer.

pub mod ports;
pub mod retry;
pub mod use_cases;

// Re-export commonly used types
pub use ports::text_generator::{GeneratorError, TextGenerator};
pub use retry::RetryPolicy;
pub use use_cases::generate_copy::{GenerateCopyError, GenerateCopyInput, GenerateCopyUseCase};
