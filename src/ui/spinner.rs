use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::output;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner drawn on stderr while a translation request is in flight.
///
/// Hidden in quiet mode. Cleared on [`Spinner::stop`] or drop.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        if output::is_quiet() {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let style = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);

        let bar = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    pub fn stop(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
