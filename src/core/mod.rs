//! # Core Module
//!
//! The duplicate removal and renaming engine.
//!
//! ## Modules
//! - `hasher` - Fingerprints file contents
//! - `metadata` - Reads the capture date from EXIF
//! - `record` - One discovered image and its canonical name
//! - `scanner` - Finds directories and the image files in them
//! - `resolver` - Deletes duplicate copies and renames survivors

pub mod hasher;
pub mod metadata;
pub mod record;
pub mod resolver;
pub mod scanner;

// Re-export commonly used types
pub use hasher::Fingerprint;
pub use record::FileRecord;
pub use resolver::{DuplicateResolver, ResolveOutcome, ResolverConfig};
pub use scanner::{DirectoryInventory, ScanConfig, TreeScanner};
