//! Prompt templates for copy generation

pub mod template;

pub use template::PromptTemplate;
