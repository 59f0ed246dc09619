//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),
}
