//! # Tabane Core
//!
//! The heart of the Tabane video grouping engine. Given the listing of one
//! library folder, it decides which files form a single logical work,
//! which are multi-part segments of one playable item, which are alternate
//! editions, and which are bonus content to keep out of the catalog.
//!
//! The engine is pure: no filesystem access, no persistence, no shared
//! mutable state. Callers hand in a listing snapshot plus an options
//! bundle and own the result. Two calls with the same inputs produce the
//! same output; nothing depends on hash iteration order or thread
//! scheduling.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabane_core::{FileEntry, FolderContext, VideoResolver};
//!
//! let resolver = VideoResolver::with_defaults().unwrap();
//! let folder = FolderContext::new("/library/films");
//! let listing = vec![
//!     FileEntry::file("/library/films/Arrival (2016).mkv"),
//!     FileEntry::file("/library/films/Heat (1995) cd1.mkv"),
//!     FileEntry::file("/library/films/Heat (1995) cd2.mkv"),
//! ];
//!
//! let result = resolver.resolve_multiple(&folder, &listing, None).unwrap();
//! assert_eq!(result.items.len(), 2);
//!
//! let heat = result.items.iter().find(|i| i.name == "Heat").unwrap();
//! assert_eq!(heat.additional_parts.len(), 1);
//! ```
pub mod classify;
pub mod error;
pub mod grouper;
pub mod naming;
pub mod options;
pub mod resolver;
pub mod types;

// Re-export primary API
pub use classify::{EntryPartition, partition_entries};
pub use error::{Result, TabaneError};
pub use grouper::group_videos;
pub use naming::{HeuristicNameParser, NameParser};
pub use options::{DEFAULT_VIDEO_EXTENSIONS, NamingOptions};
pub use resolver::VideoResolver;
pub use types::{
    CollectionKind, ExtraType, FileEntry, FolderContext, Grouping, MultiItemResult, ParsedVideo,
    ResolvedVideo, VideoGroup,
};
