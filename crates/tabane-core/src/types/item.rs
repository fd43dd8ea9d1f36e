use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::entry::FileEntry;

/// One resolved catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVideo {
    /// Primary file path a player opens first.
    pub path: PathBuf,
    /// Display name of the item.
    pub name: String,
    /// Production year, when the naming carries one.
    pub year: Option<u16>,
    /// Paths of parts 2..N of a multi-part work, in playback order.
    pub additional_parts: Vec<PathBuf>,
    /// Paths of alternate encodes or cuts of the same work.
    pub alternate_versions: Vec<PathBuf>,
    /// True when the item shares its folder with other catalog items, or
    /// the folder sits directly under the library root.
    pub in_mixed_folder: bool,
}

/// Aggregate result of resolving one folder listing.
///
/// `T` is the caller's item type; the plain engine output is
/// `MultiItemResult<ResolvedVideo>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiItemResult<T = ResolvedVideo> {
    /// Catalog items produced from the listing.
    pub items: Vec<T>,
    /// Subdirectories, bonus content, and files nothing claimed, for the
    /// caller to recurse into or shelve.
    pub extra_files: Vec<FileEntry>,
}
