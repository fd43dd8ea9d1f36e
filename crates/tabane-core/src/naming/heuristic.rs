//! Regex-driven default parser for common video naming conventions.

use std::path::Path;

use regex::Regex;
use tracing::trace;

use super::NameParser;
use crate::error::Result;
use crate::options::NamingOptions;
use crate::types::{ExtraType, ParsedVideo};

/// Characters that delimit tokens inside a file stem.
const SEPARATORS: &[char] = &[' ', '.', '-', '_'];

/// Default [`NameParser`] implementation.
///
/// Works through the stem in passes: extra suffix, part indicator,
/// edition label, year, then title cleanup. Each pass consumes the text
/// it recognized so later passes see only what is left.
#[derive(Debug)]
pub struct HeuristicNameParser {
    re_part: Regex,
    re_edition: Regex,
    re_year: Regex,
    re_extra: Regex,
    re_extra_short: Regex,
    re_brackets: Regex,
}

impl HeuristicNameParser {
    /// Compiles the parser's patterns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TabaneError::RegexError`] when a pattern fails to
    /// compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_part: Regex::new(r"(?i)[\s._-]+(?:cd|dvd|disc|disk|part|pt)[\s._-]*(\d{1,3})\s*$")?,
            re_edition: Regex::new(r"\{edition-([^}]+)\}")?,
            re_year: Regex::new(
                r"[(\[]((?:19|20)\d{2})[)\]]|[\s._-]((?:19|20)\d{2})(?:[\s._-]|$)",
            )?,
            re_extra: Regex::new(
                r"(?i)(?:^|[\s._-])(trailer|sample|behind[\s._-]?the[\s._-]?scenes|deleted[\s._-]?scenes?|interview|featurette|clip|theme[\s._-]?song)\s*$",
            )?,
            re_extra_short: Regex::new(r"(?i)[-._]short\s*$")?,
            re_brackets: Regex::new(r"\[[^\]]*\]|\([^)]*\)")?,
        })
    }

    /// Strips a recognized extra suffix off `work` and returns its kind.
    ///
    /// "short" only counts with a tight separator, so titles that merely
    /// end in the word keep their meaning.
    fn take_extra(&self, work: &mut String) -> Option<ExtraType> {
        if let Some(start) = self.re_extra_short.find(work).map(|m| m.start()) {
            work.truncate(start);
            return Some(ExtraType::Short);
        }

        let (start, raw_token) = {
            let caps = self.re_extra.captures(work)?;
            let full = caps.get(0)?;
            (full.start(), caps[1].to_string())
        };
        let token: String = raw_token
            .to_lowercase()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        let extra = match token.as_str() {
            "trailer" => ExtraType::Trailer,
            "sample" => ExtraType::Sample,
            "behindthescenes" => ExtraType::BehindTheScenes,
            "deletedscene" | "deletedscenes" => ExtraType::DeletedScene,
            "interview" => ExtraType::Interview,
            "featurette" => ExtraType::Featurette,
            "clip" => ExtraType::Clip,
            "themesong" => ExtraType::ThemeSong,
            _ => return None,
        };
        work.truncate(start);
        Some(extra)
    }

    /// Strips a trailing part indicator (cd1, disc 2, part3, ...) off
    /// `work` and returns its index.
    fn take_part(&self, work: &mut String) -> Option<u32> {
        let (start, digits) = {
            let caps = self.re_part.captures(work)?;
            let full = caps.get(0)?;
            (full.start(), caps[1].to_string())
        };
        let part = digits.parse().ok()?;
        work.truncate(start);
        Some(part)
    }

    /// Removes a `{edition-...}` label from `work` and returns it.
    fn take_edition_label(&self, work: &mut String) -> Option<String> {
        let (range, label) = {
            let caps = self.re_edition.captures(work)?;
            let full = caps.get(0)?;
            (full.range(), caps[1].trim().to_string())
        };
        work.replace_range(range, " ");
        (!label.is_empty()).then_some(label)
    }

    /// Finds the last plausible year in `text` and splits around it.
    ///
    /// A year at the very start of the text is never taken; the work needs
    /// a title, and names like "2012 (2009)" keep "2012" as theirs.
    fn split_year(&self, text: &str) -> (Option<u16>, String, String) {
        let mut found: Option<(std::ops::Range<usize>, u16)> = None;
        for caps in self.re_year.captures_iter(text) {
            let Some(full) = caps.get(0) else { continue };
            if full.start() == 0 {
                continue;
            }
            let digits = caps.get(1).or_else(|| caps.get(2));
            if let Some(year) = digits.and_then(|d| d.as_str().parse().ok()) {
                found = Some((full.range(), year));
            }
        }
        match found {
            Some((range, year)) => (
                Some(year),
                text[..range.start].to_string(),
                text[range.end..].to_string(),
            ),
            None => (None, text.to_string(), String::new()),
        }
    }

    /// Cleans a title region: bracket groups go, dots and underscores
    /// become spaces, whitespace collapses.
    fn clean_title(&self, region: &str) -> String {
        let stripped = self.re_brackets.replace_all(region, " ");
        let flattened = stripped.replace(['.', '_'], " ");
        let collapsed = flattened.split_whitespace().collect::<Vec<_>>().join(" ");
        collapsed.trim_matches([' ', '-']).to_string()
    }
}

impl NameParser for HeuristicNameParser {
    fn parse(
        &self,
        path: &Path,
        is_directory: bool,
        options: &NamingOptions,
        folder_hint: Option<&str>,
    ) -> Option<ParsedVideo> {
        let stem = if is_directory {
            path.file_name()?.to_string_lossy().into_owned()
        } else {
            let extension = path.extension()?.to_string_lossy();
            if !options.is_video_extension(&extension) {
                return None;
            }
            path.file_stem()?.to_string_lossy().into_owned()
        };
        if stem.trim().is_empty() {
            return None;
        }

        let mut work = stem.clone();
        let extra_type = self.take_extra(&mut work);
        let part = self.take_part(&mut work);
        let mut edition = self.take_edition_label(&mut work);

        let (mut year, pre, post) = self.split_year(&work);
        let mut region = pre;

        if edition.is_none() {
            if let Some(hint) = folder_hint.map(str::trim).filter(|h| !h.is_empty()) {
                if self.split_year(hint).0.is_some() {
                    // Folder names like "Gladiator (2000)"; match against the
                    // raw stem so the year inside the prefix lines up.
                    if let Some((base, label)) = split_prefix_label(&work, hint) {
                        let (base_year, base_pre, _) = self.split_year(&base);
                        if base_year.is_some() {
                            year = base_year;
                        }
                        region = base_pre;
                        edition = Some(label);
                    }
                } else {
                    let label = post.trim_matches(SEPARATORS);
                    if year.is_some()
                        && !label.is_empty()
                        && region.trim_matches(SEPARATORS).eq_ignore_ascii_case(hint)
                    {
                        edition = Some(label.to_string());
                    } else {
                        let mut flat = region.clone();
                        flat.push(' ');
                        flat.push_str(&post);
                        if let Some((base, label)) = split_prefix_label(&flat, hint) {
                            region = base;
                            edition = Some(label);
                        }
                    }
                }
            }
        }

        let mut title = self.clean_title(&region);
        if title.is_empty() {
            title = stem.trim().to_string();
        }

        let mut parsed = ParsedVideo::new(path, title);
        parsed.file_name = stem;
        parsed.year = year;
        parsed.part = part;
        parsed.edition = edition;
        parsed.extra_type = extra_type;
        trace!(path = %path.display(), title = %parsed.title, "parsed video name");
        Some(parsed)
    }
}

/// Splits "<folder name><separator><label>" into base and label when the
/// text is named after its containing folder.
fn split_prefix_label(text: &str, hint: &str) -> Option<(String, String)> {
    let trimmed = text.trim_end();
    if trimmed.len() <= hint.len() || !trimmed.is_char_boundary(hint.len()) {
        return None;
    }
    let (base, remainder) = trimmed.split_at(hint.len());
    if !base.eq_ignore_ascii_case(hint) || !remainder.starts_with(SEPARATORS) {
        return None;
    }
    let label = remainder.trim_matches(SEPARATORS);
    (!label.is_empty()).then(|| (base.to_string(), label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> HeuristicNameParser {
        HeuristicNameParser::new().unwrap()
    }

    fn parse(name: &str) -> Option<ParsedVideo> {
        parser().parse(Path::new(name), false, &NamingOptions::default(), None)
    }

    fn parse_in(name: &str, hint: &str) -> Option<ParsedVideo> {
        parser().parse(Path::new(name), false, &NamingOptions::default(), Some(hint))
    }

    #[test]
    fn title_and_year_from_parenthesized_name() {
        let v = parse("/films/Arrival (2016).mkv").unwrap();
        assert_eq!(v.title, "Arrival");
        assert_eq!(v.year, Some(2016));
        assert_eq!(v.file_name, "Arrival (2016)");
        assert!(v.part.is_none());
        assert!(v.edition.is_none());
        assert!(v.extra_type.is_none());
    }

    #[test]
    fn title_and_year_from_dotted_name() {
        let v = parse("/films/The.Matrix.1999.1080p.BluRay.x264.mkv").unwrap();
        assert_eq!(v.title, "The Matrix");
        assert_eq!(v.year, Some(1999));
    }

    #[test]
    fn last_year_wins_for_titles_containing_one() {
        let v = parse("/films/Blade Runner 2049 (2017).mkv").unwrap();
        assert_eq!(v.title, "Blade Runner 2049");
        assert_eq!(v.year, Some(2017));
    }

    #[test]
    fn leading_year_is_the_title() {
        let v = parse("/films/2012 (2009).mkv").unwrap();
        assert_eq!(v.title, "2012");
        assert_eq!(v.year, Some(2009));
    }

    #[test]
    fn part_indicators_detected() {
        for name in [
            "/m/Heat (1995) cd1.mkv",
            "/m/Heat (1995) - Part 1.mkv",
            "/m/Heat (1995).disc1.mkv",
            "/m/Heat (1995)_pt 1.mkv",
        ] {
            let v = parse(name).unwrap();
            assert_eq!(v.part, Some(1), "part not found in {name}");
            assert_eq!(v.title, "Heat", "title wrong for {name}");
            assert_eq!(v.year, Some(1995), "year wrong for {name}");
        }
    }

    #[test]
    fn large_part_numbers_parse() {
        let v = parse("/m/Concert dvd12.mkv").unwrap();
        assert_eq!(v.part, Some(12));
        assert_eq!(v.title, "Concert");
    }

    #[test]
    fn edition_from_braces() {
        let v = parse("/m/Blade Runner (1982) {edition-Final Cut}.mkv").unwrap();
        assert_eq!(v.edition.as_deref(), Some("Final Cut"));
        assert_eq!(v.title, "Blade Runner");
        assert_eq!(v.year, Some(1982));
    }

    #[test]
    fn edition_from_folder_named_file() {
        let v = parse_in("/m/Gladiator/Gladiator - Extended.mkv", "Gladiator").unwrap();
        assert_eq!(v.edition.as_deref(), Some("Extended"));
        assert_eq!(v.title, "Gladiator");
    }

    #[test]
    fn edition_with_year_in_file_name() {
        let v = parse_in("/m/Gladiator/Gladiator (2000) - 4K Remaster.mkv", "Gladiator").unwrap();
        assert_eq!(v.year, Some(2000));
        assert_eq!(v.edition.as_deref(), Some("4K Remaster"));
        assert_eq!(v.title, "Gladiator");
    }

    #[test]
    fn edition_with_year_in_folder_name() {
        let v = parse_in(
            "/m/Gladiator (2000)/Gladiator (2000) - 1080p.mkv",
            "Gladiator (2000)",
        )
        .unwrap();
        assert_eq!(v.year, Some(2000));
        assert_eq!(v.edition.as_deref(), Some("1080p"));
        assert_eq!(v.title, "Gladiator");
    }

    #[test]
    fn file_matching_folder_exactly_is_not_an_edition() {
        let v = parse_in("/m/Gladiator (2000)/Gladiator (2000).mkv", "Gladiator (2000)").unwrap();
        assert!(v.edition.is_none());
        assert_eq!(v.title, "Gladiator");
        assert_eq!(v.year, Some(2000));
    }

    #[test]
    fn extra_suffixes_classified() {
        let cases = [
            ("/m/Movie-trailer.mkv", ExtraType::Trailer),
            ("/m/Movie.sample.mkv", ExtraType::Sample),
            ("/m/Movie - Behind The Scenes.mkv", ExtraType::BehindTheScenes),
            ("/m/Movie deleted scenes.mkv", ExtraType::DeletedScene),
            ("/m/Movie_featurette.mkv", ExtraType::Featurette),
            ("/m/Movie-short.mkv", ExtraType::Short),
            ("/m/Movie theme song.mkv", ExtraType::ThemeSong),
        ];
        for (name, expected) in cases {
            let v = parse(name).unwrap();
            assert_eq!(v.extra_type, Some(expected), "wrong class for {name}");
            assert_eq!(v.title, "Movie", "title wrong for {name}");
        }
    }

    #[test]
    fn bare_extra_token_keeps_stem_as_title() {
        let v = parse("/m/interview.mkv").unwrap();
        assert_eq!(v.extra_type, Some(ExtraType::Interview));
        assert_eq!(v.title, "interview");
    }

    #[test]
    fn title_ending_in_short_is_not_an_extra() {
        let v = parse("/m/The Long And Short.mkv").unwrap();
        assert!(v.extra_type.is_none());
        assert_eq!(v.title, "The Long And Short");
    }

    #[test]
    fn non_video_extensions_rejected() {
        assert!(parse("/m/notes.txt").is_none());
        assert!(parse("/m/README").is_none());
        assert!(parse("/m/cover.jpg").is_none());
    }

    #[test]
    fn directories_parse_without_extension_gate() {
        let v = parser()
            .parse(
                Path::new("/library/Heat (1995)"),
                true,
                &NamingOptions::default(),
                None,
            )
            .unwrap();
        assert_eq!(v.title, "Heat");
        assert_eq!(v.year, Some(1995));
        assert_eq!(v.file_name, "Heat (1995)");
    }

    #[test]
    fn release_group_brackets_dropped_from_title() {
        let v = parse("/anime/[SubsPlease] Lone Wolf - 24 (1080p).mkv").unwrap();
        assert_eq!(v.title, "Lone Wolf - 24");
        assert!(v.year.is_none());
    }

    #[test]
    fn custom_extension_table_respected() {
        let options = NamingOptions::default().with_video_extensions(["ogv"]);
        let p = parser();
        assert!(p.parse(Path::new("/m/a.ogv"), false, &options, None).is_some());
        assert!(p.parse(Path::new("/m/a.mkv"), false, &options, None).is_none());
    }
}
