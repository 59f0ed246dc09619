//! Copy brief value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The structured input for one copy generation request (Value Object)
///
/// A brief is constructed fresh per submission, consumed once, and
/// discarded; nothing persists across requests. All six fields are free
/// text and must be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyBrief {
    /// Brand or company name
    pub brand_name: String,
    /// What the company does, in a few words
    pub description: String,
    /// Message for the audience unaware of the problem
    pub oblivious: String,
    /// Message for the audience that knows but is indifferent
    pub apathetic: String,
    /// Message for the audience actively considering solutions
    pub thinking: String,
    /// Message for the audience in pain or urgency
    pub hurting: String,
}

impl CopyBrief {
    /// Create a validated brief. Every field is trimmed and must be non-empty.
    pub fn new(
        brand_name: impl Into<String>,
        description: impl Into<String>,
        oblivious: impl Into<String>,
        apathetic: impl Into<String>,
        thinking: impl Into<String>,
        hurting: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            brand_name: Self::require("brand_name", brand_name.into())?,
            description: Self::require("description", description.into())?,
            oblivious: Self::require("oblivious", oblivious.into())?,
            apathetic: Self::require("apathetic", apathetic.into())?,
            thinking: Self::require("thinking", thinking.into())?,
            hurting: Self::require("hurting", hurting.into())?,
        })
    }

    fn require(name: &'static str, value: String) -> Result<String, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyField(name));
        }
        Ok(trimmed.to_string())
    }
}
