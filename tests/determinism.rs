//! Property-based tests for digest and reassembly determinism

use discdump::digest;
use discdump::split::{part_path, SplitReader};
use proptest::prelude::*;
use std::io::{Cursor, Read};
use tempfile::TempDir;

/// Reader that hands out at most one byte per call, forcing the digest loop
/// through its smallest possible chunks.
struct Dribble<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Read for Dribble<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.pos >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

/// Test that the digest is independent of how the source is chunked
#[test]
fn test_digest_chunking_independence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<Vec<u8>>(), |data| {
            let whole = digest::sha1_hex(Cursor::new(&data)).unwrap();
            let dribbled = digest::sha1_hex(Dribble {
                data: &data,
                pos: 0,
            })
            .unwrap();

            assert_eq!(whole, dribbled);
            assert_eq!(whole.len(), 40);
            assert!(whole.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));

            Ok(())
        })
        .unwrap();
}

/// Test that a reassembled split sequence digests like the unsplit content
#[test]
fn test_split_reassembly_digest_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<Vec<u8>>(), 1usize..5), |(data, parts)| {
            let temp_dir = TempDir::new().unwrap();
            let base = temp_dir.path().join("blob");

            let chunk = (data.len() / parts).max(1);
            for (index, slice) in data.chunks(chunk).enumerate() {
                std::fs::write(part_path(&base, index as u32), slice).unwrap();
            }

            let from_parts = digest::sha1_hex(SplitReader::open(&base)).unwrap();
            let from_whole = digest::sha1_hex(Cursor::new(&data)).unwrap();
            assert_eq!(from_parts, from_whole);

            Ok(())
        })
        .unwrap();
}

/// Test that file digests match in-memory digests of the same bytes
#[test]
fn test_file_digest_matches_memory_digest() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.bin");
    let data = b"lorem ipsum";
    std::fs::write(&path, data).unwrap();

    assert_eq!(
        digest::sha1_file(&path).unwrap(),
        digest::sha1_hex(Cursor::new(data)).unwrap()
    );
    assert_eq!(
        digest::sha1_file(&path).unwrap(),
        "bfb7759a67daeb65410490b4d98bb9da7d1ea2ce"
    );
}
