//! Groups records that share a fingerprint.
//!
//! The first record discovered for a fingerprint is the group's survivor;
//! every later one is folded into the survivor's `duplicates` list.

use crate::core::hasher::Fingerprint;
use crate::core::record::FileRecord;
use std::collections::HashMap;

/// Collapse records into one survivor per fingerprint.
///
/// Survivors come back in the discovery order of their first member. A
/// survivor with an empty `duplicates` list had no duplicate in the input.
pub fn group_by_fingerprint(records: Vec<FileRecord>) -> Vec<FileRecord> {
    let mut index: HashMap<Fingerprint, usize> = HashMap::new();
    let mut survivors: Vec<FileRecord> = Vec::new();

    for record in records {
        match index.get(&record.fingerprint) {
            Some(&position) => survivors[position].duplicates.push(record.path),
            None => {
                index.insert(record.fingerprint.clone(), survivors.len());
                survivors.push(record);
            }
        }
    }

    survivors
}
