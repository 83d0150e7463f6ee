//! Built-in default configuration
//!
//! Hardcoded defaults, the base layer of every resolution. Because overlays
//! can only change values the base already declares, this module also fixes
//! the universe of analyzers, rules, and settings a document may configure.

use std::collections::BTreeMap;

use super::model::{AnalyzerConfig, LintConfig, RuleConfig, SettingValue};

/// The built-in default configuration.
pub fn default_config() -> LintConfig {
    LintConfig {
        ignore_files: None,
        analyzers: analyzers(&[
            (
                "typography",
                AnalyzerConfig {
                    settings: settings(&[("enabled", SettingValue::Flag(true))]),
                    rules: rules(&[
                        (
                            "trailing_whitespace",
                            rule(&[
                                ("enabled", SettingValue::Flag(true)),
                                ("ignore_blank_lines", SettingValue::Flag(false)),
                            ]),
                        ),
                        (
                            "max_line_length",
                            rule(&[
                                ("enabled", SettingValue::Flag(true)),
                                ("max_length", SettingValue::Number(120)),
                            ]),
                        ),
                        (
                            "no_tab_characters",
                            rule(&[("enabled", SettingValue::Flag(true))]),
                        ),
                        (
                            "final_newline",
                            rule(&[("enabled", SettingValue::Flag(false))]),
                        ),
                    ]),
                },
            ),
            (
                "naming",
                AnalyzerConfig {
                    settings: settings(&[("enabled", SettingValue::Flag(true))]),
                    rules: rules(&[
                        (
                            "type_names",
                            rule(&[
                                ("enabled", SettingValue::Flag(true)),
                                ("convention", SettingValue::Text("PascalCase".to_string())),
                            ]),
                        ),
                        (
                            "binding_names",
                            rule(&[
                                ("enabled", SettingValue::Flag(true)),
                                ("convention", SettingValue::Text("camelCase".to_string())),
                            ]),
                        ),
                        (
                            "parameter_names",
                            rule(&[
                                ("enabled", SettingValue::Flag(false)),
                                ("convention", SettingValue::Text("camelCase".to_string())),
                            ]),
                        ),
                    ]),
                },
            ),
            (
                "structure",
                AnalyzerConfig {
                    settings: settings(&[("enabled", SettingValue::Flag(true))]),
                    rules: rules(&[
                        (
                            "max_lines_in_function",
                            rule(&[
                                ("enabled", SettingValue::Flag(true)),
                                ("max_lines", SettingValue::Number(100)),
                            ]),
                        ),
                        (
                            "nested_statements",
                            rule(&[
                                ("enabled", SettingValue::Flag(true)),
                                ("depth", SettingValue::Number(8)),
                            ]),
                        ),
                    ]),
                },
            ),
            (
                "hints",
                AnalyzerConfig {
                    settings: settings(&[
                        ("enabled", SettingValue::Flag(false)),
                        ("add", SettingValue::List(Vec::new())),
                    ]),
                    rules: BTreeMap::new(),
                },
            ),
        ]),
    }
}

fn settings(entries: &[(&str, SettingValue)]) -> BTreeMap<String, SettingValue> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn rule(entries: &[(&str, SettingValue)]) -> RuleConfig {
    RuleConfig {
        settings: settings(entries),
    }
}

fn rules(entries: &[(&str, RuleConfig)]) -> BTreeMap<String, RuleConfig> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn analyzers(entries: &[(&str, AnalyzerConfig)]) -> BTreeMap<String, AnalyzerConfig> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_declare_core_analyzers() {
        let config = default_config();
        assert!(config.analyzers.contains_key("typography"));
        assert!(config.analyzers.contains_key("naming"));
        assert!(config.analyzers.contains_key("structure"));
    }

    #[test]
    fn test_defaults_have_no_ignore_block() {
        assert!(default_config().ignore_files.is_none());
    }

    #[test]
    fn test_default_rule_values() {
        let config = default_config();
        let typography = &config.analyzers["typography"];
        assert_eq!(
            typography.rules["max_line_length"].settings["max_length"],
            SettingValue::Number(120)
        );
        assert_eq!(
            config.analyzers["naming"].rules["type_names"].settings["convention"],
            SettingValue::Text("PascalCase".to_string())
        );
    }

    #[test]
    fn test_defaults_serialize_to_toml() {
        let text = toml::to_string(&default_config()).unwrap();
        let parsed: LintConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, default_config());
    }
}
