//! # Error Module
//!
//! Error types for the photo tidier.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - every variant names the path it concerns
//! - **Recoverable vs fatal** - hash and metadata errors are reported per
//!   file as events and never reach `DedupError`; resolve errors stop the run

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum DedupError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),
}

/// Errors that occur while walking directories
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("{path} is not a valid path")]
    InvalidRoot { path: PathBuf },

    #[error("Permission denied accessing: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read directory {path}: {reason}")]
    ReadDirectory { path: PathBuf, reason: String },
}

/// Errors that occur while fingerprinting file contents
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while reading embedded image metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata from {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

/// Errors that occur while mutating the filesystem
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Failed to delete duplicate {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, DedupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_root_reads_like_a_log_line() {
        let error = ScanError::InvalidRoot {
            path: PathBuf::from("/photos/missing"),
        };
        assert_eq!(error.to_string(), "/photos/missing is not a valid path");
    }

    #[test]
    fn hash_error_includes_path() {
        let error = HashError::Io {
            path: PathBuf::from("/photos/broken.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let message = error.to_string();
        assert!(message.contains("/photos/broken.jpg"));
        assert!(message.contains("gone"));
    }

    #[test]
    fn rename_error_names_both_paths() {
        let error = ResolveError::Rename {
            from: PathBuf::from("/photos/a.jpg"),
            to: PathBuf::from("/photos/2023-05-01 10.20.30.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("/photos/a.jpg"));
        assert!(message.contains("2023-05-01 10.20.30.jpg"));
    }

    #[test]
    fn resolve_error_converts_to_top_level() {
        let error: DedupError = ResolveError::Delete {
            path: PathBuf::from("/photos/b.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "busy"),
        }
        .into();
        assert!(matches!(error, DedupError::Resolve(_)));
    }

    #[test]
    fn only_run_ending_errors_reach_the_top_level() {
        let error: DedupError = ScanError::InvalidRoot {
            path: PathBuf::from("/photos/missing"),
        }
        .into();
        assert!(matches!(error, DedupError::Scan(_)));
        assert_eq!(
            error.to_string(),
            "Scanning error: /photos/missing is not a valid path"
        );
    }
}
