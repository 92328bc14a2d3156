//! Text report output.
//!
//! The report is the plain-text rendering of one run: the two-line title/id
//! summary followed by one `path: digest` line per manifest entry. It targets
//! any line sink, so callers can write a file, a terminal, or a test buffer.

use crate::manifest::Manifest;
use crate::sfo::DiscSummary;
use chrono::Local;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default report file name for a run started now, e.g.
/// `dump_log_20260807_153012.txt`.
pub fn default_report_name() -> String {
    format!("dump_log_{}.txt", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Write the summary header and manifest body as text lines.
pub fn write_report<W: Write>(
    mut out: W,
    summary: &DiscSummary,
    manifest: &Manifest,
) -> io::Result<()> {
    writeln!(out, "Game Title: {}", summary.title)?;
    writeln!(out, "Game ID: {}", summary.title_id)?;
    writeln!(out)?;
    for entry in &manifest.entries {
        writeln!(out, "{}: {}", entry.path.display(), entry.digest)?;
    }
    if manifest.cancelled {
        writeln!(out)?;
        writeln!(out, "Run cancelled after {} files.", manifest.len())?;
    }
    Ok(())
}

/// Write the report to a file, creating it fresh.
pub fn write_report_file(
    path: &Path,
    summary: &DiscSummary,
    manifest: &Manifest,
) -> io::Result<PathBuf> {
    let file = std::fs::File::create(path)?;
    write_report(io::BufWriter::new(file), summary, manifest)?;
    Ok(path.to_path_buf())
}
