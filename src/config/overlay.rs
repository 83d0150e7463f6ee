//! Configuration layering
//!
//! `override_config` stacks a partial overlay config onto a base config.
//! The base decides which analyzers, rules, and settings exist; the overlay
//! only changes the values of entries the base already has. The one
//! exception is the ignore-file block, which the overlay may introduce or
//! extend (see [`IgnoreUpdateMode`]).

use super::merge::overwrite_map;
use super::model::{
    AnalyzerConfig, IgnoreFilesConfig, IgnoreUpdateMode, LintConfig, RuleConfig,
};

/// Layer `overlay` onto `base`, producing the combined configuration.
///
/// Override semantics:
/// - Ignore files: `Overwrite` replaces the base's block, `Add` appends the
///   overlay's patterns after the base's, an absent block keeps the base's
/// - Analyzers, rules, settings: values overridden key by key; keys the base
///   does not declare are ignored
pub fn override_config(base: &LintConfig, overlay: &LintConfig) -> LintConfig {
    LintConfig {
        ignore_files: override_ignore_files(
            base.ignore_files.as_ref(),
            overlay.ignore_files.as_ref(),
        ),
        analyzers: overwrite_map(&base.analyzers, &overlay.analyzers, override_analyzer),
    }
}

fn override_ignore_files(
    base: Option<&IgnoreFilesConfig>,
    overlay: Option<&IgnoreFilesConfig>,
) -> Option<IgnoreFilesConfig> {
    match overlay {
        None => base.cloned(),
        Some(overlay) => match overlay.update {
            IgnoreUpdateMode::Overwrite => Some(overlay.clone()),
            IgnoreUpdateMode::Add => {
                // Base patterns stay first so the overlay's entries win
                // under last-match-wins evaluation.
                let mut patterns = base.map(|b| b.patterns.clone()).unwrap_or_default();
                patterns.extend(overlay.patterns.iter().cloned());
                Some(IgnoreFilesConfig {
                    update: overlay.update,
                    patterns,
                })
            }
        },
    }
}

fn override_analyzer(base: &AnalyzerConfig, overlay: &AnalyzerConfig) -> AnalyzerConfig {
    AnalyzerConfig {
        settings: overwrite_map(&base.settings, &overlay.settings, |_, overlay| {
            overlay.clone()
        }),
        rules: overwrite_map(&base.rules, &overlay.rules, override_rule),
    }
}

fn override_rule(base: &RuleConfig, overlay: &RuleConfig) -> RuleConfig {
    RuleConfig {
        settings: overwrite_map(&base.settings, &overlay.settings, |_, overlay| {
            overlay.clone()
        }),
    }
}
