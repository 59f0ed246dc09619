//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for generated copy
///
/// This is a domain concept representing how the result should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain formatted text (default)
    Text,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}
