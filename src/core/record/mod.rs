//! # Record Module
//!
//! One discovered image file together with its fingerprint and the name it
//! should carry once tidied.

use crate::core::hasher::Fingerprint;
use crate::error::ResolveError;
use std::fs;
use std::path::{Path, PathBuf};

/// Stem prefix for files without a capture date
pub const UNDATED_PREFIX: &str = "none_";

/// Number of fingerprint characters used in an undated name
pub const UNDATED_FINGERPRINT_LEN: usize = 5;

/// A discovered image file
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Current location; updated by `rename_to`
    pub path: PathBuf,
    /// Content fingerprint computed at discovery
    pub fingerprint: Fingerprint,
    /// Target file name, extension included
    pub canonical_name: String,
    /// Paths of the other copies in this record's duplicate group.
    /// Only filled in on a group's survivor.
    pub duplicates: Vec<PathBuf>,
}

impl FileRecord {
    /// Build a record; `capture_date` is an already formatted name stem.
    pub fn new(path: PathBuf, fingerprint: Fingerprint, capture_date: Option<String>) -> Self {
        let canonical_name = canonical_name(&path, &fingerprint, capture_date.as_deref());
        Self {
            path,
            fingerprint,
            canonical_name,
            duplicates: Vec::new(),
        }
    }

    /// Current path with the file name replaced by the canonical name
    pub fn canonical_path(&self) -> PathBuf {
        self.path.with_file_name(&self.canonical_name)
    }

    /// Whether the file already carries its canonical name
    pub fn is_canonical(&self) -> bool {
        self.canonical_path() == self.path
    }

    /// Move the file to `target` and point the record at it
    pub fn rename_to(&mut self, target: &Path) -> Result<(), ResolveError> {
        fs::rename(&self.path, target).map_err(|source| ResolveError::Rename {
            from: self.path.clone(),
            to: target.to_path_buf(),
            source,
        })?;
        self.path = target.to_path_buf();
        Ok(())
    }
}

/// Canonical file name for a file at `path`.
///
/// Dated files use the date stem, undated ones `none_` plus the first five
/// fingerprint characters. The original extension is kept as written.
pub fn canonical_name(path: &Path, fingerprint: &Fingerprint, capture_date: Option<&str>) -> String {
    let stem = match capture_date {
        Some(date) => date.to_string(),
        None => format!(
            "{}{}",
            UNDATED_PREFIX,
            fingerprint.prefix(UNDATED_FINGERPRINT_LEN)
        ),
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    }
}
