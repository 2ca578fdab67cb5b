//! Per-directory inventory of image files.

use super::{filter::ImageFilter, ScanConfig};
use crate::core::hasher::hash_file;
use crate::core::metadata::extract_capture_date;
use crate::core::record::FileRecord;
use crate::events::{Event, EventSender, InventoryEvent, InventoryProgress};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Lists the image files of one directory and fingerprints them
#[derive(Debug, Clone)]
pub struct DirectoryInventory {
    filter: ImageFilter,
    follow_symlinks: bool,
    max_depth: Option<usize>,
    progress_interval: usize,
}

impl DirectoryInventory {
    /// Create an inventory using the given scan configuration
    pub fn new(config: &ScanConfig) -> Self {
        let mut filter = ImageFilter::new();
        if let Some(ref extensions) = config.extensions {
            filter = filter.with_extensions(extensions.clone());
        }

        Self {
            filter,
            follow_symlinks: config.follow_symlinks,
            max_depth: config.max_depth,
            progress_interval: config.progress_interval,
        }
    }

    /// Candidate image files below `dir`, in file-name order.
    ///
    /// Only files are returned; a directory named like an image is not a
    /// candidate. Unreadable entries are left out.
    pub fn list_image_files(&self, dir: &Path) -> Vec<PathBuf> {
        let mut walker = WalkDir::new(dir)
            .min_depth(1)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name();

        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        walker
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| !entry.file_type().is_dir())
            .map(|entry| entry.into_path())
            .filter(|path| self.filter.should_include(path))
            .collect()
    }

    /// Build a record for every candidate file in discovery order.
    ///
    /// Files that cannot be hashed are reported and left out. Metadata
    /// failures are reported too, but the file stays in with no date.
    pub fn build(&self, dir: &Path, events: &EventSender) -> Vec<FileRecord> {
        let start = Instant::now();
        let files = self.list_image_files(dir);
        let total = files.len();
        let mut records = Vec::with_capacity(total);

        for (index, path) in files.into_iter().enumerate() {
            let completed = index + 1;

            match hash_file(&path) {
                Ok(Some(fingerprint)) => {
                    let capture_date = match extract_capture_date(&path) {
                        Ok(date) => date,
                        Err(e) => {
                            events.send(Event::Inventory(InventoryEvent::MetadataFailed {
                                path: path.clone(),
                                message: e.to_string(),
                            }));
                            None
                        }
                    };
                    records.push(FileRecord::new(path, fingerprint, capture_date));
                }
                Ok(None) => {}
                Err(e) => {
                    events.send(Event::Inventory(InventoryEvent::HashFailed {
                        path,
                        message: e.to_string(),
                    }));
                }
            }

            if self.progress_interval > 0 && completed % self.progress_interval == 0 {
                events.send(Event::Inventory(InventoryEvent::Progress(InventoryProgress {
                    directory: dir.to_path_buf(),
                    completed,
                    total,
                    elapsed_secs: start.elapsed().as_secs(),
                })));
            }
        }

        records
    }
}
