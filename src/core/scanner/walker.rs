//! Directory tree walking using walkdir.

use super::DirectoryInventory;
use crate::core::resolver::{DuplicateResolver, ResolverConfig};
use crate::error::{DedupError, ScanError};
use crate::events::{Event, EventSender, RunEvent, TreeEvent, TreeSummary};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Configuration for directory scanning
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Whether to follow symbolic links
    pub follow_symlinks: bool,
    /// How deep an inventory reaches below its directory (None = unlimited).
    /// The default of 1 keeps duplicate detection to a single directory.
    pub max_depth: Option<usize>,
    /// Custom extensions to include (None = use defaults)
    pub extensions: Option<Vec<String>>,
    /// Report inventory progress every this many files (0 = never)
    pub progress_interval: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_depth: Some(1),
            extensions: None,
            progress_interval: 50,
        }
    }
}

/// Runs the resolver over every directory below each root
pub struct TreeScanner {
    config: ScanConfig,
    resolver: DuplicateResolver,
}

impl TreeScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig, resolver_config: ResolverConfig) -> Self {
        let resolver = DuplicateResolver::new(DirectoryInventory::new(&config), resolver_config);
        Self { config, resolver }
    }

    /// Every directory below `root`, root excluded, in file-name order.
    ///
    /// Directories that cannot be read are reported and left out.
    pub fn subdirectories(&self, root: &Path, events: &EventSender) -> Vec<PathBuf> {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        let mut directories = Vec::new();

        for entry_result in walker {
            match entry_result {
                Ok(entry) => {
                    if entry.file_type().is_dir() {
                        directories.push(entry.into_path());
                    }
                }
                Err(e) => {
                    let path = e.path().map(|p| p.to_path_buf()).unwrap_or_default();

                    let error = if e.io_error().map(|e| e.kind())
                        == Some(std::io::ErrorKind::PermissionDenied)
                    {
                        ScanError::PermissionDenied { path: path.clone() }
                    } else {
                        ScanError::ReadDirectory {
                            path: path.clone(),
                            reason: e.to_string(),
                        }
                    };

                    events.send(Event::Tree(TreeEvent::DirectoryError {
                        path,
                        message: error.to_string(),
                    }));
                }
            }
        }

        directories
    }

    /// Tidy every directory below one root.
    ///
    /// An invalid root is reported and returned as `ScanError::InvalidRoot`.
    /// A failed delete or rename stops the scan and is returned as is.
    pub fn scan_root(&self, root: &Path, events: &EventSender) -> Result<TreeSummary, DedupError> {
        if !root.is_dir() {
            events.send(Event::Tree(TreeEvent::InvalidRoot {
                path: root.to_path_buf(),
            }));
            return Err(ScanError::InvalidRoot {
                path: root.to_path_buf(),
            }
            .into());
        }

        events.send(Event::Tree(TreeEvent::Started {
            root: root.to_path_buf(),
        }));

        let mut summary = TreeSummary::default();

        for directory in self.subdirectories(root, events) {
            let outcome = self.resolver.resolve_directory(&directory, events)?;
            summary.absorb(TreeSummary {
                directories_scanned: 1,
                images_found: outcome.images_found,
                duplicates_deleted: outcome.deleted.len(),
                files_renamed: outcome.renamed.len(),
            });
        }

        events.send(Event::Tree(TreeEvent::Completed {
            root: root.to_path_buf(),
            summary,
        }));

        Ok(summary)
    }

    /// Tidy each root in turn. Invalid roots are skipped; anything else that
    /// goes wrong ends the run.
    pub fn scan_roots(&self, roots: &[PathBuf], events: &EventSender) -> Result<TreeSummary, DedupError> {
        events.send(Event::Run(RunEvent::Started {
            roots: roots.to_vec(),
        }));

        let mut total = TreeSummary::default();

        for root in roots {
            match self.scan_root(root, events) {
                Ok(summary) => total.absorb(summary),
                Err(DedupError::Scan(ScanError::InvalidRoot { .. })) => continue,
                Err(e) => {
                    events.send(Event::Run(RunEvent::Aborted {
                        message: e.to_string(),
                    }));
                    return Err(e);
                }
            }
        }

        events.send(Event::Run(RunEvent::Finished));

        Ok(total)
    }
}
