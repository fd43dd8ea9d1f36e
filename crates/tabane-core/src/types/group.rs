use std::path::Path;

use serde::{Deserialize, Serialize};

use super::parsed::{ExtraType, ParsedVideo};

/// A cluster of files that together represent one logical video work.
///
/// `files` holds the primary playable files ordered by part index, so
/// `files[0]` is the canonical file a player opens first; the list is
/// never empty. `alternate_versions` holds other encodes or cuts of the
/// same work. A file appears in at most one list across one grouping
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoGroup {
    /// Display name of the work, taken from the canonical file.
    pub name: String,
    /// Production year shared by the clustered files.
    pub year: Option<u16>,
    /// Primary playable files in playback order.
    pub files: Vec<ParsedVideo>,
    /// Alternate encodes or cuts attached to this work.
    pub alternate_versions: Vec<ParsedVideo>,
    /// Set when the whole group is bonus content of the given kind.
    pub extra_type: Option<ExtraType>,
}

impl VideoGroup {
    /// Creates a group seeded with its canonical file; name, year, and
    /// extra classification all come from that file.
    #[must_use]
    pub fn new(canonical: ParsedVideo) -> Self {
        Self {
            name: canonical.title.clone(),
            year: canonical.year,
            extra_type: canonical.extra_type,
            files: vec![canonical],
            alternate_versions: Vec::new(),
        }
    }

    /// The canonical primary file.
    #[must_use]
    pub fn canonical(&self) -> &ParsedVideo {
        &self.files[0]
    }

    /// True when this group is bonus content rather than a catalog item.
    #[must_use]
    pub fn is_extra(&self) -> bool {
        self.extra_type.is_some()
    }

    /// Iterates over every file path claimed by this group, primaries
    /// first.
    pub fn claimed_paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.files
            .iter()
            .chain(self.alternate_versions.iter())
            .map(|file| file.path.as_path())
    }
}

/// Complete outcome of one grouping pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    /// Groups ordered by the first appearance of their canonical file in
    /// the input listing.
    pub groups: Vec<VideoGroup>,
    /// Parsed files no group claimed, surfaced to the caller instead of
    /// being dropped.
    pub unclaimed: Vec<ParsedVideo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn group_seeds_from_canonical() {
        let mut file = ParsedVideo::new("/m/Heat (1995).mkv", "Heat");
        file.year = Some(1995);
        let group = VideoGroup::new(file);

        assert_eq!(group.name, "Heat");
        assert_eq!(group.year, Some(1995));
        assert_eq!(group.canonical().path, PathBuf::from("/m/Heat (1995).mkv"));
        assert!(!group.is_extra());
    }

    #[test]
    fn claimed_paths_cover_both_lists() {
        let mut group = VideoGroup::new(ParsedVideo::new("/m/a.mkv", "A"));
        group.files.push(ParsedVideo::new("/m/a2.mkv", "A"));
        group
            .alternate_versions
            .push(ParsedVideo::new("/m/a-4k.mkv", "A"));

        let paths: Vec<_> = group.claimed_paths().collect();
        assert_eq!(
            paths,
            [
                Path::new("/m/a.mkv"),
                Path::new("/m/a2.mkv"),
                Path::new("/m/a-4k.mkv"),
            ]
        );
    }

    #[test]
    fn extra_group_flagged_by_canonical() {
        let mut trailer = ParsedVideo::new("/m/a-trailer.mkv", "a");
        trailer.extra_type = Some(ExtraType::Trailer);
        let group = VideoGroup::new(trailer);
        assert!(group.is_extra());
        assert_eq!(group.extra_type, Some(ExtraType::Trailer));
    }
}
