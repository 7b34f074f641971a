//! Trailing archive signature detection.
//!
//! Detection is a pure magic-number sniff, not a structural validation of
//! the archive: read 4 bytes at a fixed negative offset from end-of-file
//! and compare. An executable without the signature is a normal
//! development build, so every failure mode here degrades silently to
//! "no archive present".

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Magic bytes of the ZIP end-of-central-directory record.
pub const ARCHIVE_SIGNATURE: [u8; 4] = *b"PK\x05\x06";

/// Size of an end-of-central-directory record with an empty comment.
///
/// The signature of an appended archive sits exactly this many bytes before
/// end-of-file. Archives with a trailing comment are not detected.
pub const EOCD_TAIL_LEN: u64 = 22;

/// Check whether a byte buffer ends in an end-of-central-directory record.
///
/// Pure variant of [`detect`] over in-memory bytes: true iff the buffer
/// holds at least 22 bytes and the 4 bytes at `len - 22` equal the
/// signature.
pub fn has_trailing_signature(tail: &[u8]) -> bool {
    let Some(start) = tail.len().checked_sub(EOCD_TAIL_LEN as usize) else {
        return false;
    };
    tail[start..start + 4] == ARCHIVE_SIGNATURE
}

/// Check whether the file at `image` carries a trailing archive.
///
/// Reads exactly 4 bytes at offset `len - 22`. Any open/seek/read failure
/// (missing file, permission error, file shorter than the EOCD record)
/// returns `false`. A file of exactly 22 bytes seeks to offset 0 and is
/// checked like any other.
pub fn detect(image: &Path) -> bool {
    let Ok(mut file) = File::open(image) else {
        return false;
    };
    if file.seek(SeekFrom::End(-(EOCD_TAIL_LEN as i64))).is_err() {
        return false;
    }
    let mut sig = [0u8; 4];
    if file.read_exact(&mut sig).is_err() {
        return false;
    }
    sig == ARCHIVE_SIGNATURE
}
