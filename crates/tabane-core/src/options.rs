//! The per-call configuration bundle.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::types::CollectionKind;

/// Entries whose name matches this are dropped before grouping.
static DEFAULT_IGNORE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\bsample\b")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// File extensions the default parser accepts as video containers.
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &[
    "avi", "flv", "m2ts", "m4v", "mkv", "mov", "mp4", "mpeg", "mpg", "ts", "webm", "wmv",
];

/// Immutable configuration consumed by one resolution call.
///
/// The bundle is plain data: cloning it is cheap and two calls with equal
/// bundles and equal listings produce equal results.
#[derive(Debug, Clone)]
pub struct NamingOptions {
    /// Compiled pattern matched against entry names; matching entries are
    /// excluded from grouping.
    pub ignore_pattern: Regex,
    /// Lowercase extensions the default parser treats as video files.
    pub video_extensions: Vec<String>,
    /// When true, editions of one work fold into a single item as
    /// alternate versions; when false every edition stands alone.
    pub support_multi_edition: bool,
    /// When true, items are named from the parsed title; when false, from
    /// the literal file name.
    pub parse_name: bool,
    /// When set, the validity gate rejects folders whose declared
    /// collection kind is not in this list. `None` allows every kind.
    pub allowed_collections: Option<Vec<CollectionKind>>,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            ignore_pattern: DEFAULT_IGNORE.clone(),
            video_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            support_multi_edition: true,
            parse_name: true,
            allowed_collections: None,
        }
    }
}

impl NamingOptions {
    /// Creates the default options bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the ignore pattern. The pattern is matched
    /// case-insensitively against entry names.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TabaneError::RegexError`] when the pattern does
    /// not compile.
    pub fn with_ignore_pattern(mut self, pattern: &str) -> Result<Self> {
        self.ignore_pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(self)
    }

    /// Sets whether editions of one work fold into a single item.
    #[must_use]
    pub fn with_multi_edition(mut self, enabled: bool) -> Self {
        self.support_multi_edition = enabled;
        self
    }

    /// Sets whether items are named from parsed titles or literal file
    /// names.
    #[must_use]
    pub fn with_parse_name(mut self, enabled: bool) -> Self {
        self.parse_name = enabled;
        self
    }

    /// Restricts resolution to folders declaring one of the given kinds.
    #[must_use]
    pub fn with_allowed_collections(
        mut self,
        kinds: impl IntoIterator<Item = CollectionKind>,
    ) -> Self {
        self.allowed_collections = Some(kinds.into_iter().collect());
        self
    }

    /// Replaces the extension table used by the default parser.
    #[must_use]
    pub fn with_video_extensions(
        mut self,
        extensions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.video_extensions = extensions
            .into_iter()
            .map(|ext| ext.into().to_lowercase())
            .collect();
        self
    }

    /// True when an entry with this name is excluded outright.
    #[must_use]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_pattern.is_match(name)
    }

    /// True when the extension belongs to the video table, ignoring case.
    #[must_use]
    pub fn is_video_extension(&self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        self.video_extensions.iter().any(|ext| *ext == extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ignore_matches_sample_word() {
        let options = NamingOptions::default();
        assert!(options.is_ignored("Movie.Sample.mkv"));
        assert!(options.is_ignored("sample.mkv"));
        assert!(!options.is_ignored("Samples of Life.mkv"));
        assert!(!options.is_ignored("Simple.mkv"));
    }

    #[test]
    fn custom_ignore_pattern_is_case_insensitive() {
        let options = NamingOptions::default()
            .with_ignore_pattern(r"\bjunk\b")
            .unwrap();
        assert!(options.is_ignored("Some.JUNK.mkv"));
        assert!(!options.is_ignored("Movie.Sample.mkv"));
    }

    #[test]
    fn bad_ignore_pattern_reported() {
        assert!(NamingOptions::default().with_ignore_pattern("(").is_err());
    }

    #[test]
    fn video_extension_lookup_ignores_case() {
        let options = NamingOptions::default();
        assert!(options.is_video_extension("MKV"));
        assert!(options.is_video_extension("mp4"));
        assert!(!options.is_video_extension("txt"));
    }

    #[test]
    fn builders_override_defaults() {
        let options = NamingOptions::new()
            .with_multi_edition(false)
            .with_parse_name(false)
            .with_allowed_collections([CollectionKind::Movies])
            .with_video_extensions(["MKV"]);

        assert!(!options.support_multi_edition);
        assert!(!options.parse_name);
        assert_eq!(
            options.allowed_collections,
            Some(vec![CollectionKind::Movies])
        );
        assert_eq!(options.video_extensions, vec!["mkv".to_string()]);
    }
}
