//! Generation progress spinner

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the backend call (and any retries) is in flight
pub struct GenerationSpinner {
    bar: Option<ProgressBar>,
}

impl GenerationSpinner {
    /// Start the spinner. With `quiet` set, nothing is displayed.
    pub fn start(quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message("Generating OATH copy...");
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(bar) }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    /// Stop the spinner and erase it from the terminal.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
