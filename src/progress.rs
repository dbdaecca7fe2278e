//! Progress bar display for configuration staging

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for staged file copies
pub struct ProgressDisplay {
    copy_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total copy count
    pub fn new(total_copies: u64) -> Self {
        let copy_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let copy_pb = ProgressBar::new(total_copies);
        copy_pb.set_style(copy_style);

        Self { copy_pb }
    }

    /// Update to show the destination just staged
    pub fn update(&self, dest: &str) {
        // Truncate long paths for display
        let display_path = if dest.len() > 50 {
            format!("...{}", &dest[dest.len() - 47..])
        } else {
            dest.to_string()
        };
        self.copy_pb.set_message(display_path);
        self.copy_pb.inc(1);
    }

    /// Finish the bar
    pub fn finish(&self) {
        self.copy_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.copy_pb.abandon();
    }
}
