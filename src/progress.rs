//! Single-line progress reporting using indicatif.
//!
//! The reporter keeps one self-overwriting line of the form
//! `Processed N files`, refreshed every fixed interval of processed files,
//! and finishes with a trailing newline. Purely informational, not
//! machine-parseable.

use indicatif::{ProgressBar, ProgressStyle};

/// Self-overwriting progress counter for the organize run.
pub struct Progress {
    bar: Option<ProgressBar>,
    every: u64,
}

impl Progress {
    /// Create a new reporter. With `quiet`, nothing is ever printed.
    /// `every` controls how many processed files pass between refreshes.
    #[must_use]
    pub fn new(quiet: bool, every: u64) -> Self {
        let bar = if quiet {
            None
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template("{msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            Some(bar)
        };
        Self {
            bar,
            every: every.max(1),
        }
    }

    /// Refresh the counter line if `processed` hit the reporting interval.
    pub fn tick(&self, processed: u64) {
        if processed % self.every != 0 {
            return;
        }
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("Processed {processed} files"));
        }
    }

    /// Print the final count and terminate the line.
    pub fn finish(&self, processed: u64) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!("Processed {processed} files"));
        }
    }
}
