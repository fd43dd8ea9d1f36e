use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One direct child of the folder being resolved.
///
/// Entries are snapshots supplied by the caller; the engine never touches
/// the filesystem itself, so an entry carries everything resolution needs
/// to know about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Full path of the entry.
    pub path: PathBuf,
    /// Final path component, used for ignore matching.
    pub name: String,
    /// Whether the entry is a subdirectory.
    pub is_directory: bool,
}

impl FileEntry {
    /// Creates a file entry, deriving the name from the path.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::with_kind(path, false)
    }

    /// Creates a directory entry, deriving the name from the path.
    #[must_use]
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::with_kind(path, true)
    }

    fn with_kind(path: impl Into<PathBuf>, is_directory: bool) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            is_directory,
        }
    }
}

/// The folder whose listing is being resolved.
///
/// The flags describe where the folder sits in the library tree; both feed
/// directly into resolution decisions (root folders are never resolved,
/// top-level folders force the mixed-folder flag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderContext {
    /// Full path of the folder.
    pub path: PathBuf,
    /// Display name of the folder, defaulting to its final path component.
    pub name: String,
    /// True when this folder is the library root itself.
    pub is_root: bool,
    /// True when this folder sits directly under the library root.
    pub is_top_level: bool,
}

impl FolderContext {
    /// Creates a folder context with both tree flags off.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            is_root: false,
            is_top_level: false,
        }
    }

    /// Marks the folder as the library root.
    #[must_use]
    pub fn with_root(mut self, is_root: bool) -> Self {
        self.is_root = is_root;
        self
    }

    /// Marks the folder as a direct child of the library root.
    #[must_use]
    pub fn with_top_level(mut self, is_top_level: bool) -> Self {
        self.is_top_level = is_top_level;
        self
    }

    /// Overrides the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Declared collection type of a library folder.
///
/// The engine treats the kind as opaque: it is only compared against the
/// allowed set configured in the options bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Movies,
    Series,
    MusicVideos,
    HomeVideos,
    Trailers,
    Photos,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Movies => "movies",
            Self::Series => "series",
            Self::MusicVideos => "musicvideos",
            Self::HomeVideos => "homevideos",
            Self::Trailers => "trailers",
            Self::Photos => "photos",
        };
        write!(f, "{token}")
    }
}
