//! The filename parsing seam.
//!
//! Grouping never inspects file names directly; it consumes structured
//! [`ParsedVideo`](crate::types::ParsedVideo) records produced behind the
//! [`NameParser`] trait. The crate ships [`HeuristicNameParser`] as the
//! default implementation; callers with their own naming conventions
//! implement the trait instead and keep the grouping machinery unchanged.

pub mod heuristic;

pub use heuristic::HeuristicNameParser;

use std::path::Path;

use crate::options::NamingOptions;
use crate::types::ParsedVideo;

/// Contract for turning one path into structured naming information.
///
/// Implementations must be deterministic: identical inputs yield identical
/// outputs. Returning `None` means the path is not recognized as video
/// content; such files are excluded from grouping and surface as leftover
/// entries, never as errors.
pub trait NameParser {
    /// Parses a single path.
    ///
    /// `folder_hint` carries the display name of the containing folder;
    /// parsers use it to recognize edition labels on files named after
    /// their folder.
    fn parse(
        &self,
        path: &Path,
        is_directory: bool,
        options: &NamingOptions,
        folder_hint: Option<&str>,
    ) -> Option<ParsedVideo>;
}
