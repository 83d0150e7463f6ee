//! Ignore evaluation tests
//!
//! Covers ordered pattern evaluation with negation through the full stack:
//! patterns declared in documents, combined across configuration layers,
//! then evaluated against candidate files.

use srclint_ignore::{explain, file_ignored, parse_pattern_lines, IgnorePattern};
use srclint_scope::document::ConfigDocument;
use srclint_scope::{override_config, LintConfig, ScopePath};
use std::fs;
use tempfile::TempDir;

fn patterns(lines: &[&str]) -> Vec<IgnorePattern> {
    parse_pattern_lines(lines.iter().copied()).unwrap()
}

fn ignored(patterns: &[IgnorePattern], path: &str) -> bool {
    let path = ScopePath::parse(path).unwrap();
    file_ignored(patterns, path.components())
}

fn config(text: &str) -> LintConfig {
    toml::from_str(text).unwrap()
}

#[test]
fn test_negation_rescues_matching_file() {
    let rules = patterns(&["dog/*", "!source.*"]);

    assert!(!ignored(&rules, "D:/dog/source.fs"));
    assert!(ignored(&rules, "D:/dog/source2.fs"));
}

#[test]
fn test_pattern_order_decides() {
    let reversed = patterns(&["!source.*", "dog/*"]);

    // With the negation first, the later positive pattern wins again.
    assert!(ignored(&reversed, "D:/dog/source.fs"));
}

#[test]
fn test_reignore_after_negation() {
    let rules = patterns(&["generated/*", "!generated/api.fs", "generated/api.*"]);

    assert!(ignored(&rules, "repo/generated/api.fs"));
    assert!(ignored(&rules, "repo/generated/other.fs"));
}

#[test]
fn test_layered_add_mode_appends_negations() {
    let base = config(
        r#"
        [ignore_files]
        patterns = ["obj/", "*.tmp"]
        "#,
    );
    let overlay = config(
        r#"
        [ignore_files]
        update = "add"
        patterns = ["!keep.tmp"]
        "#,
    );

    let combined = override_config(&base, &overlay);
    let rules = combined
        .ignore_files
        .as_ref()
        .unwrap()
        .parsed_patterns()
        .unwrap();

    assert!(ignored(&rules, "repo/obj/cache.bin"));
    assert!(ignored(&rules, "repo/scratch.tmp"));
    assert!(!ignored(&rules, "repo/keep.tmp"));
}

#[test]
fn test_layered_overwrite_mode_discards_base_patterns() {
    let base = config(
        r#"
        [ignore_files]
        patterns = ["*.tmp"]
        "#,
    );
    let overlay = config(
        r#"
        [ignore_files]
        update = "overwrite"
        patterns = ["obj/"]
        "#,
    );

    let combined = override_config(&base, &overlay);
    let rules = combined
        .ignore_files
        .as_ref()
        .unwrap()
        .parsed_patterns()
        .unwrap();

    assert!(!ignored(&rules, "repo/scratch.tmp"));
    assert!(ignored(&rules, "repo/obj/cache.bin"));
}

#[test]
fn test_patterns_from_loaded_document() {
    let dir = TempDir::new().unwrap();
    let document_path = dir.path().join("srclint.toml");
    fs::write(
        &document_path,
        r##"
        [ignore_files]
        patterns = [
            "# build output",
            "obj/",
            "",
            "!obj/keep/",
        ]
        "##,
    )
    .unwrap();

    let document = ConfigDocument::load(&document_path).unwrap();
    let rules = document
        .config
        .ignore_files
        .as_ref()
        .unwrap()
        .parsed_patterns()
        .unwrap();

    // Comments and blank lines disappear during parsing.
    assert_eq!(rules.len(), 2);
    assert!(ignored(&rules, "repo/obj/cache.bin"));
    assert!(!ignored(&rules, "repo/obj/keep/tool.fs"));
}

#[test]
fn test_explanation_names_the_deciding_pattern() {
    let rules = patterns(&["dog/*", "!source.*"]);

    let path = ScopePath::parse("D:/dog/source.fs").unwrap();
    let explanation = explain(&rules, path.components());

    assert!(!explanation.ignored);
    assert_eq!(explanation.pattern_index, Some(1));
    assert_eq!(explanation.pattern.as_deref(), Some("!source.*"));
}
