// file: src/workflow/progress.rs
// description: fetch spinner and batch outcome accounting
// reference: uses indicatif for progress display

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, success: bool) {
        self.attempted += 1;
        if success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    pub fn success_rate(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        (self.succeeded as f64 / self.attempted as f64) * 100.0
    }
}

pub struct FetchSpinner {
    bar: ProgressBar,
}

impl FetchSpinner {
    pub fn new(enabled: bool, colored: bool) -> Self {
        if !enabled {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new_spinner();
        let template = if colored {
            "{spinner:.green} [{elapsed_precise}] {msg}"
        } else {
            "{spinner} [{elapsed_precise}] {msg}"
        };
        bar.set_style(
            ProgressStyle::default_spinner()
                .template(template)
                .expect("Failed to create spinner template"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message("Fetching repositories...");

        Self { bar }
    }

    pub fn page_loaded(&self, page: u32, total: usize) {
        self.bar
            .set_message(format!("Fetched page {} ({} repositories)", page, total));
    }

    pub fn finish(&self, total: usize) {
        self.bar.finish_and_clear();
        if !self.bar.is_hidden() {
            eprintln!("{} {} repositories", "Fetched".green(), total);
        }
    }
}

impl Drop for FetchSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_outcome_counts() {
        let mut outcome = BatchOutcome::new();
        outcome.record(true);
        outcome.record(false);
        outcome.record(true);
        outcome.record(true);

        assert_eq!(outcome.attempted, 4);
        assert_eq!(outcome.succeeded, 3);
        assert_eq!(outcome.failed, 1);
        assert!(!outcome.all_succeeded());
        assert_eq!(outcome.success_rate(), 75.0);
    }

    #[test]
    fn test_empty_batch() {
        let outcome = BatchOutcome::new();
        assert!(outcome.all_succeeded());
        assert_eq!(outcome.success_rate(), 0.0);
    }

    #[test]
    fn test_hidden_spinner() {
        let spinner = FetchSpinner::new(false, false);
        spinner.page_loaded(1, 100);
        spinner.finish(100);
    }
}
