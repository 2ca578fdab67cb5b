//! # Resolver Module
//!
//! Deletes redundant copies within one directory and renames what is left.
//!
//! ## How It Works
//! 1. Inventory the directory (see `scanner::DirectoryInventory`)
//! 2. Group records by fingerprint, first discovered survives
//! 3. Delete every other copy in the group
//! 4. Rename the survivor to its canonical name
//!
//! Files without a duplicate are not touched unless
//! `ResolverConfig::rename_unique` is set.
//!
//! ## Name Collisions
//! Existing files are never overwritten. When the canonical name is taken
//! by another file, `_1`, `_2`, ... is appended to the stem until a free
//! name is found.

mod grouper;

pub use grouper::group_by_fingerprint;

use crate::core::record::FileRecord;
use crate::core::scanner::DirectoryInventory;
use crate::error::ResolveError;
use crate::events::{Event, EventSender, ResolveEvent};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the resolver
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Also rename files that have no duplicate
    pub rename_unique: bool,
}

/// What happened to one directory
#[derive(Debug, Clone, Default)]
pub struct ResolveOutcome {
    /// Records that made it into the inventory
    pub images_found: usize,
    /// Deleted duplicate copies
    pub deleted: Vec<PathBuf>,
    /// Renames as (from, to)
    pub renamed: Vec<(PathBuf, PathBuf)>,
}

/// Removes duplicates and renames survivors
pub struct DuplicateResolver {
    inventory: DirectoryInventory,
    config: ResolverConfig,
}

impl DuplicateResolver {
    /// Create a resolver that builds its records with `inventory`
    pub fn new(inventory: DirectoryInventory, config: ResolverConfig) -> Self {
        Self { inventory, config }
    }

    /// Inventory one directory and resolve it
    pub fn resolve_directory(
        &self,
        dir: &Path,
        events: &EventSender,
    ) -> Result<ResolveOutcome, ResolveError> {
        let records = self.inventory.build(dir, events);
        self.resolve(records, events)
    }

    /// Resolve an inventory.
    ///
    /// The first failing delete or rename is returned; whatever was done
    /// before it stays done.
    pub fn resolve(
        &self,
        records: Vec<FileRecord>,
        events: &EventSender,
    ) -> Result<ResolveOutcome, ResolveError> {
        let mut outcome = ResolveOutcome {
            images_found: records.len(),
            ..Default::default()
        };

        for mut survivor in group_by_fingerprint(records) {
            if survivor.duplicates.is_empty() && !self.config.rename_unique {
                continue;
            }

            for duplicate in &survivor.duplicates {
                fs::remove_file(duplicate).map_err(|source| ResolveError::Delete {
                    path: duplicate.clone(),
                    source,
                })?;
                events.send(Event::Resolve(ResolveEvent::Deleted {
                    path: duplicate.clone(),
                }));
                outcome.deleted.push(duplicate.clone());
            }

            if let Some(target) = rename_target(&survivor) {
                let from = survivor.path.clone();
                survivor.rename_to(&target)?;
                events.send(Event::Resolve(ResolveEvent::Renamed {
                    from: from.clone(),
                    to: target.clone(),
                }));
                outcome.renamed.push((from, target));
            }
        }

        Ok(outcome)
    }
}

/// Where a record should be renamed to, or `None` if it already has a
/// suitable name.
fn rename_target(record: &FileRecord) -> Option<PathBuf> {
    let canonical = record.canonical_path();
    if canonical == record.path {
        return None;
    }
    if !occupied(&canonical) {
        return Some(canonical);
    }

    let stem = canonical.file_stem().and_then(|s| s.to_str()).unwrap_or("file");
    let ext = canonical.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parent = canonical.parent().unwrap_or(Path::new(""));

    let mut counter = 1;
    loop {
        let new_name = if ext.is_empty() {
            format!("{}_{}", stem, counter)
        } else {
            format!("{}_{}.{}", stem, counter, ext)
        };
        let candidate = parent.join(new_name);

        // An earlier run already gave this file a suffixed name
        if candidate == record.path {
            return None;
        }
        if !occupied(&candidate) {
            return Some(candidate);
        }
        counter += 1;
    }
}

fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hasher::hash_file;
    use crate::core::scanner::ScanConfig;
    use crate::events::{null_sender, EventChannel};
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn resolver(rename_unique: bool) -> DuplicateResolver {
        DuplicateResolver::new(
            DirectoryInventory::new(&ScanConfig::default()),
            ResolverConfig { rename_unique },
        )
    }

    fn undated_name(path: &Path) -> String {
        let fingerprint = hash_file(path).unwrap().unwrap();
        format!("none_{}.jpg", fingerprint.prefix(5))
    }

    #[test]
    fn duplicate_pair_keeps_first_and_renames_it() {
        let temp_dir = TempDir::new().unwrap();
        let a = write(temp_dir.path(), "a.jpg", b"same bytes");
        let b = write(temp_dir.path(), "b.jpg", b"same bytes");
        let c = write(temp_dir.path(), "c.jpg", b"different bytes");
        let canonical = temp_dir.path().join(undated_name(&a));

        let outcome = resolver(false)
            .resolve_directory(temp_dir.path(), &null_sender())
            .unwrap();

        assert_eq!(outcome.images_found, 3);
        assert_eq!(outcome.deleted, vec![b.clone()]);
        assert_eq!(outcome.renamed, vec![(a.clone(), canonical.clone())]);
        assert!(!a.exists());
        assert!(!b.exists());
        assert!(canonical.exists());
        assert!(c.exists());
    }

    #[test]
    fn group_of_three_leaves_one_file() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["1.jpg", "2.jpg", "3.jpg"] {
            write(temp_dir.path(), name, b"triplet");
        }

        let outcome = resolver(false)
            .resolve_directory(temp_dir.path(), &null_sender())
            .unwrap();

        assert_eq!(outcome.deleted.len(), 2);
        assert_eq!(outcome.renamed.len(), 1);
        assert_eq!(outcome.renamed[0].0, temp_dir.path().join("1.jpg"));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn unique_files_are_untouched_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let lone = write(temp_dir.path(), "lone.jpg", b"only one");

        let outcome = resolver(false)
            .resolve_directory(temp_dir.path(), &null_sender())
            .unwrap();

        assert!(outcome.deleted.is_empty());
        assert!(outcome.renamed.is_empty());
        assert!(lone.exists());
    }

    #[test]
    fn unique_files_are_renamed_when_configured() {
        let temp_dir = TempDir::new().unwrap();
        let lone = write(temp_dir.path(), "lone.jpg", b"only one");
        let canonical = temp_dir.path().join(undated_name(&lone));

        let outcome = resolver(true)
            .resolve_directory(temp_dir.path(), &null_sender())
            .unwrap();

        assert_eq!(outcome.renamed, vec![(lone.clone(), canonical.clone())]);
        assert!(canonical.exists());
    }

    #[test]
    fn survivor_already_canonical_is_not_renamed() {
        let temp_dir = TempDir::new().unwrap();
        let probe = write(temp_dir.path(), "probe.jpg", b"twin");
        let name = undated_name(&probe);
        fs::remove_file(&probe).unwrap();

        // "none_..." sorts before "z.jpg", so it is discovered first
        let canonical = write(temp_dir.path(), &name, b"twin");
        let other = write(temp_dir.path(), "z.jpg", b"twin");

        let outcome = resolver(false)
            .resolve_directory(temp_dir.path(), &null_sender())
            .unwrap();

        assert_eq!(outcome.deleted, vec![other.clone()]);
        assert!(outcome.renamed.is_empty());
        assert!(canonical.exists());
        assert!(!other.exists());
    }

    #[test]
    fn collision_gets_numeric_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let a = write(temp_dir.path(), "a.jpg", b"pair");
        write(temp_dir.path(), "b.jpg", b"pair");
        let name = undated_name(&a);

        // An unrelated file already holds the canonical name
        let squatter = write(temp_dir.path(), &name, b"unrelated");

        let outcome = resolver(false)
            .resolve_directory(temp_dir.path(), &null_sender())
            .unwrap();

        let stem = name.trim_end_matches(".jpg");
        let suffixed = temp_dir.path().join(format!("{}_1.jpg", stem));
        assert_eq!(outcome.renamed, vec![(a, suffixed.clone())]);
        assert_eq!(fs::read(&squatter).unwrap(), b"unrelated");
        assert_eq!(fs::read(&suffixed).unwrap(), b"pair");
    }

    #[test]
    fn suffixed_name_is_stable_across_runs() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "none_abcde.jpg", b"unrelated");
        let earlier = write(temp_dir.path(), "none_abcde_1.jpg", b"pair");

        let record = FileRecord::new(
            earlier,
            crate::core::hasher::Fingerprint::from_hex("abcdef0123456789abcdef0123456789"),
            None,
        );

        assert_eq!(rename_target(&record), None);
    }

    #[test]
    fn free_canonical_name_is_used_directly() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "IMG_0001.jpg", b"pixels");
        let record = FileRecord::new(
            path,
            crate::core::hasher::Fingerprint::from_hex("0123456789abcdef0123456789abcdef"),
            Some("2023-05-01 10.20.30".to_string()),
        );

        assert_eq!(
            rename_target(&record),
            Some(temp_dir.path().join("2023-05-01 10.20.30.jpg"))
        );
    }

    #[test]
    fn deletions_and_renames_are_reported() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.jpg", b"same");
        write(temp_dir.path(), "b.jpg", b"same");
        let (sender, receiver) = EventChannel::new();

        resolver(false).resolve_directory(temp_dir.path(), &sender).unwrap();

        let events = receiver.drain();
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::Resolve(ResolveEvent::Deleted { .. }))));
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::Resolve(ResolveEvent::Renamed { .. }))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn copy_with_non_utf8_name_is_deleted() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let b = write(temp_dir.path(), "b.jpg", b"same");
        let odd = temp_dir.path().join(OsStr::from_bytes(b"caf\xE9.jpg"));
        fs::write(&odd, b"same").unwrap();

        let outcome = resolver(false)
            .resolve_directory(temp_dir.path(), &null_sender())
            .unwrap();

        assert_eq!(outcome.images_found, 2);
        assert_eq!(outcome.deleted, vec![odd.clone()]);
        assert!(!odd.exists());
        assert!(!b.exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn failed_delete_stops_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let a = write(temp_dir.path(), "a.jpg", b"same");
        let b = write(temp_dir.path(), "b.jpg", b"same");
        let records = DirectoryInventory::new(&ScanConfig::default())
            .build(temp_dir.path(), &null_sender());

        // Someone else removed the copy after the inventory was taken
        fs::remove_file(&b).unwrap();

        let result = resolver(false).resolve(records, &null_sender());
        assert!(matches!(result, Err(ResolveError::Delete { .. })));
        assert!(a.exists());
    }
}
