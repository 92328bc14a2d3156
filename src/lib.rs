//! Discdump: integrity manifests for optical-disc image trees
//!
//! Walks a disc directory layout, reassembles logically-split files into one
//! contiguous stream, computes a streaming SHA-1 digest per logical file, and
//! reads the binary title header into a two-line summary.

pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod sfo;
pub mod split;
pub mod walker;
