//! Gitignore-style ignore pattern engine for srclint.
//!
//! Patterns are parsed once into [`IgnorePattern`] values and then evaluated
//! as an ordered list against a path's components. Evaluation walks the
//! whole list: a matching pattern sets the ignore state, a matching negated
//! pattern clears it, and the last match wins. A single early match is never
//! enough, because a later `!` pattern can re-include the path and a later
//! plain pattern can re-ignore it again.

mod pattern;

pub use pattern::{parse_pattern_lines, IgnorePattern, PatternError, Segment};

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a pattern list against one path, with the pattern
/// that decided it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreExplanation {
    /// Whether the path is excluded from analysis.
    pub ignored: bool,

    /// Index into the pattern list of the last matching pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_index: Option<usize>,

    /// Raw text of the last matching pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Evaluate `patterns` in order against a path given as its components.
///
/// Returns true when the final state after the whole list is "ignored".
pub fn file_ignored<S: AsRef<str>>(patterns: &[IgnorePattern], components: &[S]) -> bool {
    explain(patterns, components).ignored
}

/// Like [`file_ignored`], but also reports which pattern decided the
/// outcome.
pub fn explain<S: AsRef<str>>(patterns: &[IgnorePattern], components: &[S]) -> IgnoreExplanation {
    let mut ignored = false;
    let mut decided_by: Option<usize> = None;

    for (index, pattern) in patterns.iter().enumerate() {
        if pattern.matches(components) {
            ignored = !pattern.negated;
            decided_by = Some(index);
        }
    }

    IgnoreExplanation {
        ignored,
        pattern_index: decided_by,
        pattern: decided_by.map(|index| patterns[index].raw.clone()),
    }
}
