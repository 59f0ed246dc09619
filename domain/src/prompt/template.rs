//! Prompt template for the OATH copywriting flow

use crate::copy::brief::CopyBrief;

/// Templates for generating backend prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the OATH copywriting prompt from a brief.
    ///
    /// Interpolation is deterministic: identical briefs yield byte-identical
    /// prompts. Field values are substituted verbatim, no escaping.
    pub fn oath_copy(brief: &CopyBrief) -> String {
        format!(
            r#"As an expert copywriter, I need your help in creating a marketing campaign for {brand},
which is a {description}. Your task is to use the OATH (Oblivious-Apathetic-Thinking-Hurting) formula to craft compelling copy.
Here's the breakdown:
- Oblivious: {oblivious}
- Apathetic: {apathetic}
- Thinking: {thinking}
- Hurting: {hurting}
Do not provide explanations, provide the final marketing copy."#,
            brand = brief.brand_name,
            description = brief.description,
            oblivious = brief.oblivious,
            apathetic = brief.apathetic,
            thinking = brief.thinking,
            hurting = brief.hurting,
        )
    }
}
