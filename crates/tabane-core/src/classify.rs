//! Splits a folder listing into subdirectories, candidate files, and
//! ignored entries.

use crate::options::NamingOptions;
use crate::types::FileEntry;

/// A folder's direct children, partitioned for grouping.
///
/// All three lists preserve the input listing order. Every input entry
/// lands in exactly one list.
#[derive(Debug, Default)]
pub struct EntryPartition<'a> {
    /// Subdirectories. Never grouped; surfaced to the caller for
    /// recursion.
    pub directories: Vec<&'a FileEntry>,
    /// Files eligible for parsing and grouping.
    pub candidates: Vec<&'a FileEntry>,
    /// Files excluded by the ignore pattern.
    pub ignored: Vec<&'a FileEntry>,
}

/// Partitions `entries` by kind and ignore status.
#[must_use]
pub fn partition_entries<'a>(
    entries: &'a [FileEntry],
    options: &NamingOptions,
) -> EntryPartition<'a> {
    let mut partition = EntryPartition::default();
    for entry in entries {
        if entry.is_directory {
            partition.directories.push(entry);
        } else if options.is_ignored(&entry.name) {
            partition.ignored.push(entry);
        } else {
            partition.candidates.push(entry);
        }
    }
    partition
}
