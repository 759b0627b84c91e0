//! Content fingerprints for change detection
//!
//! A digest is the SHA-256 of a file's bytes, rendered as
//! `sha256:<64 hex digits>`.

use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// SHA-256 fingerprint of a file's contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sha256:")?;
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Fingerprint in-memory content
pub fn digest_bytes(content: &[u8]) -> ContentDigest {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hasher.finalize());
    ContentDigest(bytes)
}

/// Fingerprint a file, or `None` if it does not exist
///
/// Only `NotFound` is treated as absent. Any other I/O error is returned
/// as is.
pub fn file_digest<P: AsRef<Path>>(path: P) -> io::Result<Option<ContentDigest>> {
    match fs::read(path.as_ref()) {
        Ok(bytes) => Ok(Some(digest_bytes(&bytes))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
