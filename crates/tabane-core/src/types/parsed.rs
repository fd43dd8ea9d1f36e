use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Category of bonus content attached to a work but kept out of the
/// primary catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraType {
    Trailer,
    Sample,
    BehindTheScenes,
    DeletedScene,
    Interview,
    Featurette,
    Clip,
    Short,
    ThemeSong,
}

impl fmt::Display for ExtraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Trailer => "trailer",
            Self::Sample => "sample",
            Self::BehindTheScenes => "behindthescenes",
            Self::DeletedScene => "deletedscene",
            Self::Interview => "interview",
            Self::Featurette => "featurette",
            Self::Clip => "clip",
            Self::Short => "short",
            Self::ThemeSong => "themesong",
        };
        write!(f, "{token}")
    }
}

/// Structured naming information for one candidate file, produced by a
/// name parser implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedVideo {
    /// Full path of the file this record was parsed from.
    pub path: PathBuf,
    /// Literal file stem, used for display when parsed naming is off.
    pub file_name: String,
    /// Cleaned title inferred from the name.
    pub title: String,
    /// Inferred production year, when the name carries one.
    pub year: Option<u16>,
    /// Multi-part index (1 for CD1 and so on), when the name carries one.
    pub part: Option<u32>,
    /// Edition or version label, such as "Director's Cut" or "1080p".
    pub edition: Option<String>,
    /// Extra classification; `None` means primary content.
    pub extra_type: Option<ExtraType>,
}

impl ParsedVideo {
    /// Creates a record with just a path and title, deriving the file stem
    /// from the path. All optional naming facts start unset.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        let path = path.into();
        let file_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            file_name,
            title: title.into(),
            year: None,
            part: None,
            edition: None,
            extra_type: None,
        }
    }

    /// True when the parser classified this file as bonus content.
    #[must_use]
    pub fn is_extra(&self) -> bool {
        self.extra_type.is_some()
    }

    /// Casefolded, punctuation-free form of the title used as the
    /// clustering key.
    #[must_use]
    pub fn normalized_title(&self) -> String {
        normalize_title(&self.title)
    }
}

/// Normalizes a title for clustering: lowercases, strips punctuation, and
/// folds separator runs into single spaces.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .replace([':', ';', '!', '?', '.', ','], "")
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
