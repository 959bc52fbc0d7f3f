//! Progress reporting while streaming the input dump.
//!
//! Thin wrapper around indicatif so the analyze command does not deal with
//! bar styling directly.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

/// Progress bar for a streaming pass over the input file.
pub struct ProgressBar {
    bar: IndicatifBar,
}

impl ProgressBar {
    /// Byte-based progress against a known file size.
    pub fn new(total_bytes: usize, label: &str) -> Self {
        let bar = IndicatifBar::new(total_bytes as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {percent:>3}% ({per_sec}, {eta})")
                .expect("Invalid progress bar template")
                .progress_chars("█░"),
        );
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Spinner for inputs whose size is unknown (e.g. compressed streams).
    pub fn new_spinner(label: &str) -> Self {
        let bar = IndicatifBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg} {spinner} {pos} rows")
                .expect("Invalid spinner template"),
        );
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Move the bar to an absolute position (bytes read or rows seen).
    pub fn update(&self, current: usize) {
        self.bar.set_position(current as u64);
    }

    /// Finish, replacing the bar with a closing message.
    pub fn finish_with_message(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
