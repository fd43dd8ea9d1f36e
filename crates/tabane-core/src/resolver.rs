//! Folder resolution: the validity gate, the parse fan-out, and the
//! mapping of groups onto catalog items.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::classify::partition_entries;
use crate::grouper::group_videos;
use crate::naming::{HeuristicNameParser, NameParser};
use crate::options::NamingOptions;
use crate::types::{
    CollectionKind, FileEntry, FolderContext, Grouping, MultiItemResult, ParsedVideo,
    ResolvedVideo, VideoGroup,
};

/// Resolves folder listings into catalog items.
///
/// The resolver owns an options bundle and a name parser and carries no
/// other state, so one instance can serve many folders, from many threads.
/// All preconditions surface as `None`; once constructed, resolution never
/// fails.
pub struct VideoResolver<P> {
    options: NamingOptions,
    parser: P,
}

impl VideoResolver<HeuristicNameParser> {
    /// Creates a resolver with default options and the built-in heuristic
    /// parser.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TabaneError::RegexError`] when the built-in
    /// patterns fail to compile.
    pub fn with_defaults() -> crate::Result<Self> {
        Ok(Self::new(NamingOptions::default(), HeuristicNameParser::new()?))
    }
}

impl<P: NameParser + Sync> VideoResolver<P> {
    /// Creates a resolver from an options bundle and a name parser.
    pub fn new(options: NamingOptions, parser: P) -> Self {
        Self { options, parser }
    }

    /// The options this resolver was built with.
    pub fn options(&self) -> &NamingOptions {
        &self.options
    }

    /// Resolves a folder listing into zero or more catalog items plus
    /// leftover entries.
    ///
    /// Returns `None` when the folder fails the validity gate: the folder
    /// is the library root, or its declared collection kind is not in the
    /// configured allowed set. An unknown kind (`None`) always passes.
    pub fn resolve_multiple(
        &self,
        folder: &FolderContext,
        entries: &[FileEntry],
        kind: Option<CollectionKind>,
    ) -> Option<MultiItemResult<ResolvedVideo>> {
        self.resolve_multiple_with(folder, entries, kind, |video| video)
    }

    /// Like [`resolve_multiple`](Self::resolve_multiple), but maps every
    /// resolved video through `make_item`, letting callers build their own
    /// item type without an intermediate collection.
    pub fn resolve_multiple_with<T>(
        &self,
        folder: &FolderContext,
        entries: &[FileEntry],
        kind: Option<CollectionKind>,
        mut make_item: impl FnMut(ResolvedVideo) -> T,
    ) -> Option<MultiItemResult<T>> {
        if self.is_rejected(folder, kind) {
            return None;
        }

        let partition = partition_entries(entries, &self.options);
        debug!(
            folder = %folder.name,
            candidates = partition.candidates.len(),
            directories = partition.directories.len(),
            ignored = partition.ignored.len(),
            "resolving folder listing"
        );

        let parsed = self.parse_candidates(&partition.candidates, folder);
        let grouping = group_videos(parsed, &self.options);
        let result = self.map_groups(folder, entries, &grouping, &mut make_item);

        debug!(
            folder = %folder.name,
            items = result.items.len(),
            leftovers = result.extra_files.len(),
            "folder resolved"
        );
        Some(result)
    }

    /// Resolves a folder that represents exactly one work, naming the item
    /// after the folder.
    ///
    /// Returns `None` when the gate rejects the folder or when the listing
    /// does not collapse to a single primary group. Editions always fold
    /// into the candidate item here, whatever the per-call options say;
    /// extras and strays are tolerated and simply not part of the item.
    pub fn resolve_single(
        &self,
        folder: &FolderContext,
        entries: &[FileEntry],
        kind: Option<CollectionKind>,
    ) -> Option<ResolvedVideo> {
        if self.is_rejected(folder, kind) {
            return None;
        }

        let partition = partition_entries(entries, &self.options);
        let parsed = self.parse_candidates(&partition.candidates, folder);
        let collapse_options = self.options.clone().with_multi_edition(true);
        let grouping = group_videos(parsed, &collapse_options);

        let mut primaries = grouping.groups.iter().filter(|group| !group.is_extra());
        let group = primaries.next()?;
        if primaries.next().is_some() {
            debug!(folder = %folder.name, "folder holds multiple works; not a single item");
            return None;
        }

        let mut video = self.video_from_group(group, false);
        if !folder.name.is_empty() {
            video.name = folder.name.clone();
        }
        Some(video)
    }

    /// Runs the name parser over every candidate file, preserving listing
    /// order.
    fn parse_candidates(
        &self,
        candidates: &[&FileEntry],
        folder: &FolderContext,
    ) -> Vec<ParsedVideo> {
        let hint = (!folder.name.is_empty()).then_some(folder.name.as_str());
        candidates
            .par_iter()
            .filter_map(|entry| {
                self.parser
                    .parse(&entry.path, entry.is_directory, &self.options, hint)
            })
            .collect()
    }

    /// Maps grouped files onto items and routes everything else into the
    /// leftover list.
    fn map_groups<T>(
        &self,
        folder: &FolderContext,
        entries: &[FileEntry],
        grouping: &Grouping,
        make_item: &mut impl FnMut(ResolvedVideo) -> T,
    ) -> MultiItemResult<T> {
        let by_path: HashMap<&Path, &FileEntry> = entries
            .iter()
            .map(|entry| (entry.path.as_path(), entry))
            .collect();

        let item_count = grouping
            .groups
            .iter()
            .filter(|group| !group.is_extra())
            .count();
        let in_mixed_folder = item_count > 1 || folder.is_top_level;

        let mut items = Vec::with_capacity(item_count);
        let mut extra_files: Vec<FileEntry> = entries
            .iter()
            .filter(|entry| entry.is_directory)
            .cloned()
            .collect();
        let mut claimed: HashSet<PathBuf> = HashSet::new();

        for group in &grouping.groups {
            if group.is_extra() {
                // Extra groups contribute no items; all of their files go
                // to the caller.
                for file in group.files.iter().chain(group.alternate_versions.iter()) {
                    claimed.insert(file.path.clone());
                    if let Some(entry) = by_path.get(file.path.as_path()) {
                        extra_files.push((*entry).clone());
                    }
                }
                continue;
            }

            for path in group.claimed_paths() {
                claimed.insert(path.to_path_buf());
            }
            items.push(make_item(self.video_from_group(group, in_mixed_folder)));
        }

        for file in &grouping.unclaimed {
            claimed.insert(file.path.clone());
            if let Some(entry) = by_path.get(file.path.as_path()) {
                extra_files.push((*entry).clone());
            }
        }

        // Whatever no group and no item claimed (ignored entries, files
        // the parser rejected) still belongs to the caller.
        for entry in entries {
            if !entry.is_directory && !claimed.contains(&entry.path) {
                extra_files.push(entry.clone());
            }
        }

        MultiItemResult { items, extra_files }
    }

    /// Builds one catalog record from a primary group.
    fn video_from_group(&self, group: &VideoGroup, in_mixed_folder: bool) -> ResolvedVideo {
        let canonical = group.canonical();
        let name = if self.options.parse_name {
            group.name.clone()
        } else {
            canonical.file_name.clone()
        };
        ResolvedVideo {
            path: canonical.path.clone(),
            name,
            year: group.year,
            additional_parts: group
                .files
                .iter()
                .skip(1)
                .map(|file| file.path.clone())
                .collect(),
            alternate_versions: group
                .alternate_versions
                .iter()
                .map(|file| file.path.clone())
                .collect(),
            in_mixed_folder,
        }
    }

    /// The validity gate: true when this folder must not be resolved.
    fn is_rejected(&self, folder: &FolderContext, kind: Option<CollectionKind>) -> bool {
        if folder.is_root {
            debug!(folder = %folder.name, "library root is never resolved");
            return true;
        }
        match (&self.options.allowed_collections, kind) {
            (Some(allowed), Some(kind)) if !allowed.contains(&kind) => {
                debug!(folder = %folder.name, %kind, "collection kind not allowed");
                true
            }
            _ => false,
        }
    }
}
