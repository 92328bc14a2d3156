//! Streaming SHA-1 digest computation.
//!
//! Digests are read in bounded chunks so that arbitrarily large disc files
//! never need to fit in memory. The chunk size only bounds the read buffer;
//! the resulting digest is identical however the source is chunked.

use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size for streaming digests.
const CHUNK_SIZE: usize = 8192;

/// Digest an entire byte source as lowercase SHA-1 hex (40 characters).
pub fn sha1_hex<R: Read>(mut source: R) -> std::io::Result<String> {
    let mut hasher = Sha1::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = source.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Open a file and digest its contents.
pub fn sha1_file(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    sha1_hex(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_known_digest() {
        let digest = sha1_hex(Cursor::new(b"ab")).unwrap();
        assert_eq!(digest, "da23614e02469a0d7c7bd1bdab5c9c474b1904dc");
    }

    #[test]
    fn test_empty_source() {
        let digest = sha1_hex(Cursor::new(b"")).unwrap();
        assert_eq!(digest, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_digest_deterministic() {
        let data = vec![0x5au8; 100_000];
        let d1 = sha1_hex(Cursor::new(&data)).unwrap();
        let d2 = sha1_hex(Cursor::new(&data)).unwrap();
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_multi_chunk_source_matches_single_chunk() {
        // Larger than one read buffer, so the streaming loop runs repeatedly.
        let data = vec![7u8; CHUNK_SIZE * 3 + 17];
        let streamed = sha1_hex(Cursor::new(&data)).unwrap();

        let mut hasher = Sha1::new();
        hasher.update(&data);
        let one_shot = hex::encode(hasher.finalize());

        assert_eq!(streamed, one_shot);
    }

    #[test]
    fn test_sha1_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.bin");
        fs::write(&path, "hello world").unwrap();

        let digest = sha1_file(&path).unwrap();
        assert_eq!(digest, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = sha1_file(&temp_dir.path().join("absent"));
        assert!(result.is_err());
    }
}
