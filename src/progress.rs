//! Progress bar display for installations

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over the items of a resolved package
pub struct ProgressDisplay {
    item_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a progress display; `hidden` suppresses all drawing (dry-run)
    pub fn new(total_items: u64, hidden: bool) -> Self {
        let item_pb = if hidden {
            ProgressBar::hidden()
        } else {
            let style = ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-");
            let pb = ProgressBar::new(total_items);
            pb.set_style(style);
            pb
        };

        Self { item_pb }
    }

    /// Show the item currently being installed
    pub fn update_item(&self, item: &str) {
        // Truncate long identifiers for display, on a char boundary
        let msg = if item.len() > 50 {
            let mut cut = item.len() - 47;
            while !item.is_char_boundary(cut) {
                cut += 1;
            }
            format!("...{}", &item[cut..])
        } else {
            item.to_string()
        };
        self.item_pb.set_message(msg);
    }

    /// Increment item progress
    pub fn inc(&self) {
        self.item_pb.inc(1);
    }

    /// Finish and clear the bar so the report prints cleanly
    pub fn finish(&self) {
        self.item_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.item_pb.abandon();
    }
}
