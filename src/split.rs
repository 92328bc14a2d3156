//! Split-file reassembly.
//!
//! Large disc files are stored as numbered parts due to a legacy filesystem
//! size limit: `base.000000`, `base.000001`, and so on, six zero-padded
//! decimal digits starting at 0. Reassembly streams the parts strictly by
//! increasing index and terminates at the first missing one; a gap therefore
//! truncates the stream rather than erroring, since parts past a gap are
//! unreachable under the upstream convention.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Suffix carried by the first part of a split sequence.
pub const FIRST_PART_SUFFIX: &str = ".000000";

/// Build the candidate path for one part of a sequence.
pub fn part_path(base: &Path, index: u32) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(format!(".{:06}", index));
    PathBuf::from(name)
}

/// Whether a path names the first part of a split sequence.
///
/// Classification is purely syntactic on the trailing pattern: a plain file
/// whose name happens to end in `.000000` is treated as a first part.
pub fn is_first_part(path: &Path) -> bool {
    path.to_str()
        .map_or(false, |s| s.ends_with(FIRST_PART_SUFFIX))
}

/// Recover the base path from a first-part path.
///
/// Returns `None` when the path does not carry the first-part suffix.
pub fn strip_part_suffix(path: &Path) -> Option<PathBuf> {
    path.to_str()
        .and_then(|s| s.strip_suffix(FIRST_PART_SUFFIX))
        .map(PathBuf::from)
}

/// Streaming reader over a split sequence.
///
/// Parts are opened lazily, one at a time, so a reassembled stream never
/// buffers more than one read's worth of data. A base with no parts at all is
/// an empty stream. A part that disappears between the existence check and
/// the open surfaces its `io::Error` through `read`.
pub struct SplitReader {
    base: PathBuf,
    next_index: u32,
    current: Option<File>,
    exhausted: bool,
}

impl SplitReader {
    /// Create a reader over the parts of `base`.
    pub fn open(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            next_index: 0,
            current: None,
            exhausted: false,
        }
    }
}

impl Read for SplitReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if let Some(file) = self.current.as_mut() {
                let n = file.read(buf)?;
                if n > 0 {
                    return Ok(n);
                }
                self.current = None;
            } else {
                if self.exhausted {
                    return Ok(0);
                }
                let candidate = part_path(&self.base, self.next_index);
                if !candidate.exists() {
                    self.exhausted = true;
                    return Ok(0);
                }
                self.current = Some(File::open(&candidate)?);
                self.next_index += 1;
            }
        }
    }
}

/// Collect an entire split sequence into memory.
pub fn reassemble(base: &Path) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    SplitReader::open(base).read_to_end(&mut out)?;
    Ok(out)
}
