//! Effective configuration resolution
//!
//! Produces the single configuration that applies at a queried path by
//! layering, least to most specific:
//! 1. The default configuration
//! 2. Global scopes whose path equals the query, in listed order
//! 3. The tree scope covering the query (see `ScopeTree::common_path`)
//!
//! The result captures the merged configuration plus which layers
//! contributed, so callers can report where a value came from.

use serde::{Deserialize, Serialize};

use crate::config::{override_config, GlobalScope, LintConfig, SettingValue};
use crate::tree::{ScopePath, ScopeTree};

/// Origin of a contributing configuration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerOrigin {
    Default,
    Global,
    Tree,
}

/// A contributing layer with provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLayer {
    /// Which kind of layer contributed.
    pub origin: LayerOrigin,

    /// Scope name (global layers only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Scope path (global and tree layers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<ScopePath>,
}

/// The effective configuration for one query, with provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// The merged configuration.
    pub config: LintConfig,

    /// Contributing layers in application order.
    pub layers: Vec<ConfigLayer>,
}

impl ResolvedConfig {
    /// Analyzer-level setting value, if declared.
    pub fn setting(&self, analyzer: &str, key: &str) -> Option<&SettingValue> {
        self.config.analyzers.get(analyzer)?.settings.get(key)
    }

    /// Rule-level setting value, if declared.
    pub fn rule_setting(&self, analyzer: &str, rule: &str, key: &str) -> Option<&SettingValue> {
        self.config
            .analyzers
            .get(analyzer)?
            .rules
            .get(rule)?
            .settings
            .get(key)
    }
}

/// Resolve the configuration that applies at `query`.
///
/// Infallible: with nothing matching, the default alone is the answer.
/// Inputs are never mutated; layering builds a fresh configuration.
pub fn resolve(
    tree: &ScopeTree,
    default: &LintConfig,
    globals: &[GlobalScope],
    query: &ScopePath,
) -> ResolvedConfig {
    let mut config = default.clone();
    let mut layers = vec![ConfigLayer {
        origin: LayerOrigin::Default,
        name: None,
        path: None,
    }];

    // Global scopes bind to their exact path only.
    for global in globals.iter().filter(|global| global.path == *query) {
        if let Some(overlay) = &global.config {
            config = override_config(&config, overlay);
            layers.push(ConfigLayer {
                origin: LayerOrigin::Global,
                name: Some(global.name.clone()),
                path: Some(global.path.clone()),
            });
        }
    }

    if let Some(matched) = tree.common_path(query) {
        if let Some(overlay) = tree.config_at(&matched) {
            config = override_config(&config, overlay);
            layers.push(ConfigLayer {
                origin: LayerOrigin::Tree,
                name: None,
                path: Some(matched),
            });
        }
    }

    ResolvedConfig { config, layers }
}
