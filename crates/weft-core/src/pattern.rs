//! Compiled content patterns
//!
//! A content pattern selects which source files get scanned for utility
//! class usage (e.g. `view/**/*.templ`). Patterns are compiled once into
//! a sequence of segment matchers and then evaluated against tokenized
//! relative paths, so no per-candidate string rebuilding happens during
//! directory traversal.
//!
//! Supported syntax:
//! - `*` matches any characters within a single path segment
//! - `**` (as a whole segment) matches zero or more path segments
//! - everything else is matched literally, including extension suffixes

use crate::error::WeftError;
use crate::result::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single path-segment matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches the segment text exactly (case-sensitive)
    Literal(String),
    /// Segment containing `*`; holds the literal parts split on `*`
    Wildcard(Vec<String>),
    /// A bare `**` segment: matches zero or more whole segments
    AnyDirs,
}

/// A compiled, immutable content pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPattern {
    text: String,
    segments: Vec<Segment>,
}

impl ContentPattern {
    /// Compile a pattern string into segment matchers.
    ///
    /// Fails with [`WeftError::InvalidPattern`] on unsupported tokens and
    /// on traversal segments (`..`) that would escape the search root.
    /// A leading `./` is accepted and stripped.
    pub fn compile(text: &str) -> Result<Self> {
        let trimmed = text.strip_prefix("./").unwrap_or(text);

        if trimmed.is_empty() {
            return Err(WeftError::invalid_pattern(text, "pattern is empty"));
        }
        if trimmed.starts_with('/') {
            return Err(WeftError::invalid_pattern(
                text,
                "absolute patterns are not allowed; patterns are relative to the search root",
            ));
        }
        if let Some(token) = ['?', '[', ']', '{', '}', '!']
            .iter()
            .find(|t| trimmed.contains(**t))
        {
            return Err(WeftError::invalid_pattern(
                text,
                format!("unsupported token '{token}'"),
            ));
        }
        if trimmed.contains('\\') {
            return Err(WeftError::invalid_pattern(
                text,
                "use '/' as the path separator",
            ));
        }

        let mut segments = Vec::new();
        for raw in trimmed.split('/') {
            match raw {
                "" => {
                    return Err(WeftError::invalid_pattern(
                        text,
                        "empty path segment; patterns must name files, not directories",
                    ));
                }
                ".." => {
                    return Err(WeftError::invalid_pattern(
                        text,
                        "'..' segments would escape the search root",
                    ));
                }
                "." => {
                    return Err(WeftError::invalid_pattern(
                        text,
                        "'.' is only allowed as a leading './'",
                    ));
                }
                "**" => segments.push(Segment::AnyDirs),
                seg if seg.contains("**") => {
                    return Err(WeftError::invalid_pattern(
                        text,
                        "'**' must stand alone as a full path segment",
                    ));
                }
                seg if seg.contains('*') => {
                    segments.push(Segment::Wildcard(
                        seg.split('*').map(str::to_string).collect(),
                    ));
                }
                seg => segments.push(Segment::Literal(seg.to_string())),
            }
        }

        Ok(Self {
            text: text.to_string(),
            segments,
        })
    }

    /// The original pattern text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The compiled segment matchers
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Longest leading run of literal segments, used to bound directory
    /// traversal. Empty when the pattern starts with a wildcard.
    pub fn literal_prefix(&self) -> PathBuf {
        self.segments
            .iter()
            .map_while(|seg| match seg {
                Segment::Literal(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// True when the pattern contains no wildcard segments at all
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|seg| matches!(seg, Segment::Literal(_)))
    }

    /// Test a path (relative to the search root) against this pattern
    pub fn matches(&self, relative: &Path) -> bool {
        let parts: Vec<&str> = relative
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();
        match_segments(&self.segments, &parts)
    }
}

impl fmt::Display for ContentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn match_segments(pattern: &[Segment], parts: &[&str]) -> bool {
    match pattern.first() {
        None => parts.is_empty(),
        Some(Segment::AnyDirs) => {
            // `**` may absorb zero or more whole segments
            (0..=parts.len()).any(|n| match_segments(&pattern[1..], &parts[n..]))
        }
        Some(segment) => match parts.first() {
            Some(part) => {
                segment_matches(segment, part) && match_segments(&pattern[1..], &parts[1..])
            }
            None => false,
        },
    }
}

fn segment_matches(segment: &Segment, part: &str) -> bool {
    match segment {
        Segment::Literal(lit) => lit == part,
        Segment::Wildcard(pieces) => wildcard_matches(pieces, part),
        Segment::AnyDirs => unreachable!("handled in match_segments"),
    }
}

/// Match a `*`-bearing segment: the first piece anchors the start, the
/// last piece anchors the end, middle pieces appear in order in between.
fn wildcard_matches(pieces: &[String], part: &str) -> bool {
    debug_assert!(pieces.len() >= 2);

    let first = &pieces[0];
    let last = &pieces[pieces.len() - 1];
    if !part.starts_with(first.as_str()) {
        return false;
    }

    let mut rest = &part[first.len()..];
    for piece in &pieces[1..pieces.len() - 1] {
        match rest.find(piece.as_str()) {
            Some(idx) => rest = &rest[idx + piece.len()..],
            None => return false,
        }
    }
    rest.ends_with(last.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(text: &str) -> ContentPattern {
        ContentPattern::compile(text).unwrap()
    }

    #[test]
    fn compiles_literal_wildcard_and_anydirs_segments() {
        let p = pat("view/**/*.templ");
        assert_eq!(
            p.segments(),
            &[
                Segment::Literal("view".into()),
                Segment::AnyDirs,
                Segment::Wildcard(vec!["".into(), ".templ".into()]),
            ]
        );
    }

    #[test]
    fn strips_leading_dot_slash() {
        let p = pat("./internal/web/view/**/*.go");
        assert_eq!(p.literal_prefix(), PathBuf::from("internal/web/view"));
        assert!(p.matches(Path::new("internal/web/view/pages/home.go")));
    }

    #[test]
    fn rejects_traversal_segments() {
        let err = ContentPattern::compile("view/../secrets/*.templ").unwrap_err();
        assert!(err.to_string().contains("escape"));
    }

    #[test]
    fn rejects_unsupported_tokens() {
        assert!(ContentPattern::compile("view/*.{templ,go}").is_err());
        assert!(ContentPattern::compile("view/?.go").is_err());
        assert!(ContentPattern::compile("view/[ab].go").is_err());
        assert!(ContentPattern::compile("view/a**b/*.go").is_err());
    }

    #[test]
    fn rejects_empty_and_absolute_patterns() {
        assert!(ContentPattern::compile("").is_err());
        assert!(ContentPattern::compile("./").is_err());
        assert!(ContentPattern::compile("/etc/*.conf").is_err());
        assert!(ContentPattern::compile("view//pages/*.go").is_err());
    }

    #[test]
    fn star_stays_within_one_segment() {
        let p = pat("view/*.templ");
        assert!(p.matches(Path::new("view/home.templ")));
        assert!(!p.matches(Path::new("view/pages/home.templ")));
    }

    #[test]
    fn double_star_matches_zero_or_more_segments() {
        let p = pat("view/**/*.templ");
        assert!(p.matches(Path::new("view/home.templ")));
        assert!(p.matches(Path::new("view/pages/home.templ")));
        assert!(p.matches(Path::new("view/pages/admin/users.templ")));
        assert!(!p.matches(Path::new("assets/home.templ")));
    }

    #[test]
    fn extension_suffix_matches_exactly() {
        let p = pat("view/**/*.go");
        assert!(p.matches(Path::new("view/pages/home.go")));
        assert!(!p.matches(Path::new("view/pages/home.gohtml")));
        assert!(!p.matches(Path::new("view/pages/home.templ")));
    }

    #[test]
    fn wildcard_with_multiple_pieces() {
        let p = pat("view/home*_gen*.go");
        assert!(p.matches(Path::new("view/home_templ_gen_v2.go")));
        assert!(!p.matches(Path::new("view/home.go")));
    }

    #[test]
    fn literal_prefix_bounds() {
        assert_eq!(
            pat("view/layouts/*.templ").literal_prefix(),
            PathBuf::from("view/layouts")
        );
        assert_eq!(pat("**/*.go").literal_prefix(), PathBuf::new());
        assert!(pat("view/layouts/base.templ").is_literal());
    }
}
