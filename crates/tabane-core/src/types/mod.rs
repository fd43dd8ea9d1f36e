//! Core data types shared across the engine.

pub mod entry;
pub mod group;
pub mod item;
pub mod parsed;

pub use entry::{CollectionKind, FileEntry, FolderContext};
pub use group::{Grouping, VideoGroup};
pub use item::{MultiItemResult, ResolvedVideo};
pub use parsed::{ExtraType, ParsedVideo, normalize_title};
