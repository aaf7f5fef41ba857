// src/progress.rs
use indicatif::{ProgressBar, ProgressStyle};

/// Lightweight progress reporting used by long-running operations (scrape/update).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one facility id completes, successful or not.
    fn item_done(&mut self, _id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Terminal progress bar (stderr).
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        Self { bar: ProgressBar::hidden() }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for BarProgress {
    fn begin(&mut self, total: usize) {
        self.bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::with_template("{msg:>12} [{bar:40}] {pos}/{len} ({eta})") {
            self.bar.set_style(style.progress_chars("=> "));
        }
        self.bar.set_message("Scraping");
    }

    fn log(&mut self, msg: &str) {
        self.bar.println(msg);
    }

    fn item_done(&mut self, _id: &str) {
        self.bar.inc(1);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}
