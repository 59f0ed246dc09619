//! Domain layer for oathwright
//!
//! This crate contains the core business types for OATH copy generation.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## OATH formula
//!
//! A four-stage audience-awareness copywriting structure:
//!
//! - **Oblivious**: the audience is unaware of the problem
//! - **Apathetic**: aware but indifferent
//! - **Thinking**: actively considering solutions
//! - **Hurting**: experiencing pain or urgency
//!
//! A [`CopyBrief`] captures one description per stage plus the brand name
//! and a short company description. [`PromptTemplate`] turns a brief into
//! the fixed instructional prompt sent to the generation backend.

pub mod config;
pub mod copy;
pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use copy::{brief::CopyBrief, generated::GeneratedCopy};
pub use core::error::DomainError;
pub use prompt::PromptTemplate;
