//! Interactive form prompter
//!
//! Collects the six brief fields. Values already supplied on the command
//! line are used as-is; missing ones are asked for on stdin, re-asking
//! while the trimmed input is empty. This guarantees the all-fields-non-empty
//! precondition before the use case is invoked.

use colored::Colorize;
use oath_domain::{CopyBrief, DomainError};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors that can occur while collecting the brief
#[derive(Debug, Error)]
pub enum PrompterError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before all fields were provided")]
    InputClosed,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Brief field values already supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct FormSeeds {
    pub brand_name: Option<String>,
    pub description: Option<String>,
    pub oblivious: Option<String>,
    pub apathetic: Option<String>,
    pub thinking: Option<String>,
    pub hurting: Option<String>,
}

/// One field's label and help hint
struct Field {
    label: &'static str,
    hint: &'static str,
}

const FIELDS: [Field; 6] = [
    Field {
        label: "Brand / company name",
        hint: "The name of your brand or company.",
    },
    Field {
        label: "What does your company do? (in 5-6 words)",
        hint: "Describe your product or service briefly.",
    },
    Field {
        label: "Address the oblivious audience",
        hint: "Highlight a problem or need the audience may not be aware of.",
    },
    Field {
        label: "Engage the apathetic audience",
        hint: "Connect with those who know about the problem but are indifferent.",
    },
    Field {
        label: "Connect with the thinking audience",
        hint: "Engage those actively considering solutions.",
    },
    Field {
        label: "Reach out to the hurting audience",
        hint: "Address those experiencing pain or urgency related to the problem.",
    },
];

/// Collects a validated [`CopyBrief`] from CLI seeds plus stdin
pub struct FormPrompter;

impl FormPrompter {
    /// Collect the brief, prompting on stdin for any missing field.
    pub fn collect(seeds: FormSeeds) -> Result<CopyBrief, PrompterError> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        Self::collect_from(seeds, &mut reader)
    }

    /// Collect from an explicit reader (for tests).
    pub fn collect_from(
        seeds: FormSeeds,
        reader: &mut impl BufRead,
    ) -> Result<CopyBrief, PrompterError> {
        let brand_name = Self::field_value(&FIELDS[0], seeds.brand_name, reader)?;
        let description = Self::field_value(&FIELDS[1], seeds.description, reader)?;
        let oblivious = Self::field_value(&FIELDS[2], seeds.oblivious, reader)?;
        let apathetic = Self::field_value(&FIELDS[3], seeds.apathetic, reader)?;
        let thinking = Self::field_value(&FIELDS[4], seeds.thinking, reader)?;
        let hurting = Self::field_value(&FIELDS[5], seeds.hurting, reader)?;

        Ok(CopyBrief::new(
            brand_name,
            description,
            oblivious,
            apathetic,
            thinking,
            hurting,
        )?)
    }

    fn field_value(
        field: &Field,
        seed: Option<String>,
        reader: &mut impl BufRead,
    ) -> Result<String, PrompterError> {
        if let Some(value) = seed {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }

        loop {
            println!("{}", field.label.bold());
            println!("  {}", field.hint.dimmed());
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Err(PrompterError::InputClosed);
            }

            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            println!("{}", "A value is required.".red());
        }
    }
}
