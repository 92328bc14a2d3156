//! Terminal progress bar wrapper around the manifest progress callback.

use indicatif::{ProgressBar, ProgressStyle};

/// Create the per-file hashing bar. The length is unknown until enumeration
/// finishes, so callers set it from the first progress callback.
pub fn manifest_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message("hashing");
    pb
}

/// Advance the bar from a (processed, total) progress report.
pub fn tick(pb: &ProgressBar, processed: usize, total: usize) {
    if pb.length() != Some(total as u64) {
        pb.set_length(total as u64);
    }
    pb.set_position(processed as u64);
}
