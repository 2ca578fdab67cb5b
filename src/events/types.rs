//! Event type definitions for progress and outcome reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted while tidying a set of roots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Run-level events spanning every root
    Run(RunEvent),
    /// Events about a single root tree
    Tree(TreeEvent),
    /// Events while building a directory inventory
    Inventory(InventoryEvent),
    /// Filesystem mutations made by the resolver
    Resolve(ResolveEvent),
}

/// Run-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunEvent {
    /// The run has started
    Started { roots: Vec<PathBuf> },
    /// Every root has been processed
    Finished,
    /// A filesystem mutation failed and the run stopped
    Aborted { message: String },
}

/// Events for one root tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeEvent {
    /// Scanning of a valid root has started
    Started { root: PathBuf },
    /// The root does not exist or is not a directory; it is skipped
    InvalidRoot { path: PathBuf },
    /// A directory below the root could not be read; it is skipped
    DirectoryError { path: PathBuf, message: String },
    /// The root has been fully processed
    Completed { root: PathBuf, summary: TreeSummary },
}

/// Events while inventorying one directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InventoryEvent {
    /// Periodic progress update
    Progress(InventoryProgress),
    /// A file could not be hashed and was left out of the inventory
    HashFailed { path: PathBuf, message: String },
    /// Metadata could not be read; the file falls back to its fingerprint name
    MetadataFailed { path: PathBuf, message: String },
}

/// Progress information during inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryProgress {
    /// Directory being inventoried
    pub directory: PathBuf,
    /// Number of files processed so far
    pub completed: usize,
    /// Number of candidate files in the directory
    pub total: usize,
    /// Whole seconds since the inventory started
    pub elapsed_secs: u64,
}

/// Filesystem mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResolveEvent {
    /// A duplicate copy was deleted
    Deleted { path: PathBuf },
    /// A survivor was renamed to its canonical name
    Renamed { from: PathBuf, to: PathBuf },
}

/// Totals for one root tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSummary {
    /// Directories run through the resolver
    pub directories_scanned: usize,
    /// Image files that made it into an inventory
    pub images_found: usize,
    /// Duplicate copies deleted
    pub duplicates_deleted: usize,
    /// Files renamed to their canonical name
    pub files_renamed: usize,
}

impl TreeSummary {
    /// Fold another summary into this one
    pub fn absorb(&mut self, other: TreeSummary) {
        self.directories_scanned += other.directories_scanned;
        self.images_found += other.images_found;
        self.duplicates_deleted += other.duplicates_deleted;
        self.files_renamed += other.files_renamed;
    }
}
