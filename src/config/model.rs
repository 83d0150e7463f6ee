//! Configuration model.
//!
//! A [`LintConfig`] holds everything srclint can be told about a scope: the
//! ignore-file block and per-analyzer settings with their per-rule settings.
//! These are plain immutable values; layering never mutates an input, it
//! builds a new config (see [`super::overlay`]).

use serde::{Deserialize, Serialize};
use srclint_ignore::{parse_pattern_lines, IgnorePattern, PatternError};
use std::collections::BTreeMap;

use crate::tree::ScopePath;

/// A single setting value, opaque to the resolution machinery beyond
/// equality and replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// On/off switch (most settings are `enabled`).
    Flag(bool),
    /// Numeric threshold, e.g. a maximum line length.
    Number(i64),
    /// Free-form text, e.g. a naming convention name.
    Text(String),
    /// List of hints or names.
    List(Vec<String>),
}

/// Settings for one rule of an analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Setting key to value.
    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,
}

/// Settings and rules for one analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Analyzer-level settings.
    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,

    /// Rule name to rule settings.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

/// How an overlay's ignore patterns combine with the base config's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IgnoreUpdateMode {
    /// Append the overlay's patterns after the base's; base patterns still
    /// apply and are evaluated first.
    Add,
    /// Discard the base's patterns entirely.
    #[default]
    Overwrite,
}

/// The ignore-file block of a config document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreFilesConfig {
    /// Combination mode applied when this block overlays another.
    #[serde(default)]
    pub update: IgnoreUpdateMode,

    /// Raw pattern strings, evaluated in order (last match wins).
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl IgnoreFilesConfig {
    /// Parse the raw pattern strings, skipping blanks and `#` comments.
    pub fn parsed_patterns(&self) -> Result<Vec<IgnorePattern>, PatternError> {
        parse_pattern_lines(self.patterns.iter().map(String::as_str))
    }
}

/// A full configuration for one scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Ignore patterns declared at this scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_files: Option<IgnoreFilesConfig>,

    /// Analyzer name to analyzer configuration.
    #[serde(default)]
    pub analyzers: BTreeMap<String, AnalyzerConfig>,
}

/// A named user- or machine-wide configuration scope, not tied to the
/// analyzed source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalScope {
    /// Path the scope is bound to.
    pub path: ScopePath,

    /// Scope name, e.g. `user`.
    pub name: String,

    /// Configuration carried by the scope, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<LintConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_value_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            settings: BTreeMap<String, SettingValue>,
        }

        let parsed: Wrapper = toml::from_str(
            r#"
            [settings]
            enabled = true
            max_line_length = 120
            convention = "camelCase"
            hints = ["a", "b"]
            "#,
        )
        .unwrap();

        assert_eq!(parsed.settings["enabled"], SettingValue::Flag(true));
        assert_eq!(parsed.settings["max_line_length"], SettingValue::Number(120));
        assert_eq!(
            parsed.settings["convention"],
            SettingValue::Text("camelCase".to_string())
        );
        assert_eq!(
            parsed.settings["hints"],
            SettingValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_full_document_from_toml() {
        let config: LintConfig = toml::from_str(
            r#"
            [ignore_files]
            update = "add"
            patterns = ["obj/", "*.tmp"]

            [analyzers.typography]
            settings = { enabled = true }

            [analyzers.typography.rules.trailing_whitespace]
            settings = { enabled = false }
            "#,
        )
        .unwrap();

        let ignore = config.ignore_files.as_ref().unwrap();
        assert_eq!(ignore.update, IgnoreUpdateMode::Add);
        assert_eq!(ignore.patterns.len(), 2);

        let typography = &config.analyzers["typography"];
        assert_eq!(typography.settings["enabled"], SettingValue::Flag(true));
        assert_eq!(
            typography.rules["trailing_whitespace"].settings["enabled"],
            SettingValue::Flag(false)
        );
    }

    #[test]
    fn test_update_mode_defaults_to_overwrite() {
        let config: LintConfig = toml::from_str(
            r#"
            [ignore_files]
            patterns = ["bin/"]
            "#,
        )
        .unwrap();
        assert_eq!(
            config.ignore_files.unwrap().update,
            IgnoreUpdateMode::Overwrite
        );
    }

    #[test]
    fn test_empty_document() {
        let config: LintConfig = toml::from_str("").unwrap();
        assert!(config.ignore_files.is_none());
        assert!(config.analyzers.is_empty());
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_parsed_patterns() {
        let ignore = IgnoreFilesConfig {
            update: IgnoreUpdateMode::Overwrite,
            patterns: vec!["dog/*".to_string(), "!source.*".to_string()],
        };
        let parsed = ignore.parsed_patterns().unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed[1].negated);
    }

    #[test]
    fn test_parsed_patterns_reports_malformed() {
        let ignore = IgnoreFilesConfig {
            update: IgnoreUpdateMode::Overwrite,
            patterns: vec!["!".to_string()],
        };
        assert!(ignore.parsed_patterns().is_err());
    }

    #[test]
    fn test_serialization_skips_absent_ignore_block() {
        let json = serde_json::to_string(&LintConfig::default()).unwrap();
        assert!(!json.contains("ignore_files"));
    }
}
