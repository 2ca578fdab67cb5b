//! # Hasher Module
//!
//! Computes content fingerprints for files.
//!
//! Files are streamed through XXH3-128 in fixed 4 KiB chunks, so memory use
//! does not depend on file size. Two files with equal fingerprints are
//! treated as byte-identical.
//!
//! ## Example
//! ```rust,ignore
//! use photo_tidy::core::hasher::hash_file;
//!
//! if let Some(fingerprint) = hash_file(&path)? {
//!     println!("{}", fingerprint);
//! }
//! ```

use crate::error::HashError;
use std::fmt;
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;
use xxhash_rust::xxh3::Xxh3;

/// Size of each read while streaming a file
pub const CHUNK_SIZE: usize = 4096;

/// Lowercase hexadecimal digest of a file's full content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Wrap an already computed hex digest
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into().to_lowercase())
    }

    /// The full hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first `len` characters of the digest (all of it if shorter)
    pub fn prefix(&self, len: usize) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(len)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprint a file.
///
/// Returns `Ok(None)` for directories. A read failure anywhere in the file
/// is returned as an error; no partial digest is produced.
pub fn hash_file(path: &Path) -> Result<Option<Fingerprint>, HashError> {
    if path.is_dir() {
        return Ok(None);
    }

    let io_error = |source| HashError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let fingerprint = hash_reader(file).map_err(io_error)?;

    Ok(Some(fingerprint))
}

/// Fingerprint everything `reader` yields, in `CHUNK_SIZE` reads.
///
/// Interrupted reads are retried; any other error ends the hash.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<Fingerprint> {
    let mut hasher = Xxh3::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(Fingerprint(format!("{:032x}", hasher.digest128())))
}
