//! Progress display for downloads

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

/// Whole-percent download progress, redrawn at most once per wall-clock second
pub struct DownloadProgress {
    pb: ProgressBar,
    total: Option<u64>,
    transferred: u64,
    started: Instant,
    last_second: Option<u64>,
}

impl DownloadProgress {
    /// Create a progress line for a body of `total` bytes, if known
    pub fn new(total: Option<u64>, visible: bool) -> Self {
        let pb = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message("Downloading: ...");

        Self {
            pb,
            total,
            transferred: 0,
            started: Instant::now(),
            last_second: None,
        }
    }

    /// Account for `bytes` more received
    pub fn advance(&mut self, bytes: u64) {
        let second = self.started.elapsed().as_secs();
        self.advance_at(bytes, second);
    }

    /// Account for `bytes` received during `second`; returns whether the display changed
    fn advance_at(&mut self, bytes: u64, second: u64) -> bool {
        self.transferred += bytes;
        if self.last_second == Some(second) {
            return false;
        }
        self.last_second = Some(second);

        match self.percent() {
            Some(percent) => {
                self.pb.set_message(format!("Downloading {percent}% complete."));
                self.pb.tick();
                true
            }
            None => false,
        }
    }

    /// Whole percent received so far, when the total size is known
    pub fn percent(&self) -> Option<u64> {
        self.total
            .filter(|total| *total > 0)
            .map(|total| (self.transferred.saturating_mul(100) / total).min(100))
    }

    /// Finish once the body stream has ended; returns the bytes transferred
    pub fn finish(self) -> u64 {
        let total = self.total.unwrap_or(self.transferred);
        self.pb.finish_and_clear();
        println!("Downloading 100% complete ({total} bytes transferred).");
        self.transferred
    }

    /// Drop the progress line after a failed transfer
    pub fn abandon(self) {
        self.pb.abandon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_is_whole_and_capped() {
        let mut progress = DownloadProgress::new(Some(300), false);
        progress.advance_at(100, 0);
        assert_eq!(progress.percent(), Some(33));
        progress.advance_at(500, 1);
        assert_eq!(progress.percent(), Some(100));
    }

    #[test]
    fn test_unknown_length_has_no_percent() {
        let mut progress = DownloadProgress::new(None, false);
        assert!(!progress.advance_at(10, 0));
        assert_eq!(progress.percent(), None);
        assert_eq!(progress.finish(), 10);
    }

    #[test]
    fn test_reports_at_most_once_per_second() {
        let mut progress = DownloadProgress::new(Some(1000), false);
        assert!(progress.advance_at(1, 0));
        assert!(!progress.advance_at(1, 0));
        assert!(!progress.advance_at(1, 0));
        assert!(progress.advance_at(1, 1));
        assert!(!progress.advance_at(1, 1));
        assert!(progress.advance_at(1, 3));
        assert_eq!(progress.finish(), 6);
    }
}
