//! Console output formatter for generated copy

use colored::Colorize;
use oath_domain::GeneratedCopy;

/// Formats generation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the generated copy as text
    pub fn format(copy: &GeneratedCopy) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Your OATH Copy ===".cyan().bold()));
        output.push_str(&copy.text);
        if !copy.text.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(&format!("\n{} {}\n", "Backend:".dimmed(), copy.backend.dimmed()));

        output
    }

    /// Format as JSON
    pub fn format_json(copy: &GeneratedCopy) -> String {
        serde_json::to_string_pretty(copy).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the generic terminal-failure message shown to the user
    pub fn format_error() -> String {
        format!(
            "{}",
            "Failed to generate OATH copy. Please try again!".red().bold()
        )
    }
}
