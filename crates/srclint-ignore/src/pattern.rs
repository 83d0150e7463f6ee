//! Ignore pattern parsing.
//!
//! Raw pattern strings follow the gitignore dialect used by srclint config
//! documents: a leading `!` negates, a trailing `/` restricts the pattern to
//! directories, and `/` separates per-component segments.

use serde::{Deserialize, Serialize};

/// Errors raised while parsing a raw pattern string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("ignore pattern '{0}' contains no path segments")]
    Empty(String),
}

/// One `/`-delimited element of an ignore pattern, matched against exactly
/// one path component.
///
/// Within a segment `*` matches any run of characters and `?` matches any
/// single character; neither crosses a component boundary. Comparison is
/// ASCII-case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text, matched by content.
    Literal(String),
    /// Text containing `*` or `?` metacharacters.
    Glob(String),
}

impl Segment {
    fn from_text(text: &str) -> Self {
        if text.contains('*') || text.contains('?') {
            Segment::Glob(text.to_string())
        } else {
            Segment::Literal(text.to_string())
        }
    }

    /// Whether this segment matches a single path component.
    pub fn matches(&self, component: &str) -> bool {
        match self {
            Segment::Literal(text) => text.eq_ignore_ascii_case(component),
            Segment::Glob(glob) => glob_match(glob, component),
        }
    }
}

/// A parsed ignore pattern.
///
/// Matching rules:
/// - a file pattern (no trailing `/`) matches when its segments match the
///   contiguous suffix of the path's components ending at the final
///   component;
/// - a directory pattern (trailing `/`) matches when its segments match a
///   contiguous run of components ending strictly before the final
///   component; the final component names a file and never takes part.
///
/// A file name therefore never matches a same-named directory and vice
/// versa, and a bare directory name never implicitly covers its children;
/// ignoring direct contents takes a trailing `/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePattern {
    /// The pattern text as written.
    pub raw: String,

    /// True when the raw text starts with `!` (a match re-includes the path).
    pub negated: bool,

    /// True when the raw text ends with `/` (matches directories only).
    pub dir_only: bool,

    /// Per-component segments, in order.
    pub segments: Vec<Segment>,
}

impl IgnorePattern {
    /// Parse a raw pattern string.
    ///
    /// Patterns that tokenize to zero segments (``, `!`, `/`) are rejected;
    /// everything else is accepted at this boundary and matching is total
    /// from then on.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let mut rest = raw;
        let negated = rest.starts_with('!');
        if negated {
            rest = &rest[1..];
        }
        let dir_only = rest.ends_with('/');

        let segments: Vec<Segment> = rest
            .split('/')
            .filter(|s| !s.is_empty())
            .map(Segment::from_text)
            .collect();

        if segments.is_empty() {
            return Err(PatternError::Empty(raw.to_string()));
        }

        Ok(Self {
            raw: raw.to_string(),
            negated,
            dir_only,
            segments,
        })
    }

    /// Whether this pattern matches a path given as its ordered components.
    pub fn matches<S: AsRef<str>>(&self, components: &[S]) -> bool {
        let n = components.len();
        let m = self.segments.len();
        if n == 0 || m == 0 {
            return false;
        }

        if self.dir_only {
            // Only components[0..n-1] name directories; the run may end at
            // any of them.
            if m + 1 > n {
                return false;
            }
            (0..=(n - 1 - m)).any(|start| self.run_matches(components, start))
        } else {
            // The run must end at the final component.
            if m > n {
                return false;
            }
            self.run_matches(components, n - m)
        }
    }

    fn run_matches<S: AsRef<str>>(&self, components: &[S], start: usize) -> bool {
        self.segments
            .iter()
            .zip(components[start..].iter())
            .all(|(segment, component)| segment.matches(component.as_ref()))
    }
}

impl std::str::FromStr for IgnorePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for IgnorePattern {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for IgnorePattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parse a list of raw pattern lines, skipping blanks and `#` comments.
///
/// Lines are trimmed before parsing, so indented entries in a config
/// document's pattern block behave the same as flush-left ones.
pub fn parse_pattern_lines<'a, I>(lines: I) -> Result<Vec<IgnorePattern>, PatternError>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(IgnorePattern::parse)
        .collect()
}

/// Backtracking glob match over one component, case-insensitive.
fn glob_match(pattern: &str, text: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = text.chars().collect();

    let mut p = 0;
    let mut t = 0;
    let mut star: Option<usize> = None;
    let mut mark = 0;

    while t < txt.len() {
        if p < pat.len() && (pat[p] == '?' || pat[p].eq_ignore_ascii_case(&txt[t])) {
            p += 1;
            t += 1;
        } else if p < pat.len() && pat[p] == '*' {
            star = Some(p);
            mark = t;
            p += 1;
        } else if let Some(star_pos) = star {
            // Give the most recent `*` one more character and retry.
            p = star_pos + 1;
            mark += 1;
            t = mark;
        } else {
            return false;
        }
    }

    while p < pat.len() && pat[p] == '*' {
        p += 1;
    }
    p == pat.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let pattern = IgnorePattern::parse("dog").unwrap();
        assert!(!pattern.negated);
        assert!(!pattern.dir_only);
        assert_eq!(pattern.segments, vec![Segment::Literal("dog".to_string())]);
    }

    #[test]
    fn test_parse_negated() {
        let pattern = IgnorePattern::parse("!source.fs").unwrap();
        assert!(pattern.negated);
        assert!(!pattern.dir_only);
    }

    #[test]
    fn test_parse_directory_only() {
        let pattern = IgnorePattern::parse("dog/").unwrap();
        assert!(pattern.dir_only);
        assert_eq!(pattern.segments.len(), 1);
    }

    #[test]
    fn test_parse_negated_directory() {
        let pattern = IgnorePattern::parse("!dog/").unwrap();
        assert!(pattern.negated);
        assert!(pattern.dir_only);
    }

    #[test]
    fn test_parse_multi_segment() {
        let pattern = IgnorePattern::parse("dog/*").unwrap();
        assert_eq!(pattern.segments.len(), 2);
        assert_eq!(pattern.segments[0], Segment::Literal("dog".to_string()));
        assert_eq!(pattern.segments[1], Segment::Glob("*".to_string()));
    }

    #[test]
    fn test_parse_collapses_empty_segments() {
        let pattern = IgnorePattern::parse("/dog//cat").unwrap();
        assert_eq!(pattern.segments.len(), 2);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(
            IgnorePattern::parse(""),
            Err(PatternError::Empty(_))
        ));
        assert!(matches!(
            IgnorePattern::parse("!"),
            Err(PatternError::Empty(_))
        ));
        assert!(matches!(
            IgnorePattern::parse("/"),
            Err(PatternError::Empty(_))
        ));
    }

    #[test]
    fn test_from_str() {
        let pattern: IgnorePattern = "bin/".parse().unwrap();
        assert!(pattern.dir_only);
    }

    #[test]
    fn test_segment_classification() {
        assert_eq!(
            Segment::from_text("plain"),
            Segment::Literal("plain".to_string())
        );
        assert_eq!(
            Segment::from_text("source.*"),
            Segment::Glob("source.*".to_string())
        );
        assert_eq!(Segment::from_text("a?c"), Segment::Glob("a?c".to_string()));
    }

    #[test]
    fn test_literal_match_is_case_insensitive() {
        let segment = Segment::Literal("Dog".to_string());
        assert!(segment.matches("dog"));
        assert!(segment.matches("DOG"));
        assert!(!segment.matches("dogs"));
    }

    #[test]
    fn test_glob_match_star() {
        assert!(glob_match("source.*", "source.fs"));
        assert!(glob_match("source.*", "source.fsx"));
        assert!(!glob_match("source.*", "source2.fs"));
        assert!(glob_match("*", "anything"));
        assert!(glob_match("*.fs", "a.fs"));
        assert!(!glob_match("*.fs", "a.fsx"));
    }

    #[test]
    fn test_glob_match_question() {
        assert!(glob_match("a?c", "abc"));
        assert!(!glob_match("a?c", "ac"));
        assert!(!glob_match("a?c", "abbc"));
    }

    #[test]
    fn test_glob_match_multiple_stars() {
        assert!(glob_match("a*b*c", "aXbYc"));
        assert!(glob_match("a*b*c", "abc"));
        assert!(!glob_match("a*b*c", "acb"));
    }

    #[test]
    fn test_parse_pattern_lines_skips_comments_and_blanks() {
        let lines = vec!["# generated", "", "  obj/  ", "*.tmp", "!keep.tmp"];
        let patterns = parse_pattern_lines(lines).unwrap();
        assert_eq!(patterns.len(), 3);
        assert!(patterns[0].dir_only);
        assert!(patterns[2].negated);
    }

    #[test]
    fn test_parse_pattern_lines_propagates_errors() {
        assert!(parse_pattern_lines(vec!["ok", "!"]).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let pattern = IgnorePattern::parse("!dog/*").unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "\"!dog/*\"");
        let back: IgnorePattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<IgnorePattern>("\"!\"").is_err());
    }
}
