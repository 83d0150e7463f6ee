//! Configuration model and layering
//!
//! A resolved configuration is built from three kinds of layer:
//! 1. Built-in defaults
//! 2. Global scopes (user- or machine-wide, applied in listed order)
//! 3. The scope tree entry covering the queried path
//!
//! Layers combine with [`override_config`]: the base decides which keys
//! exist, overlays only change their values.

mod defaults;
mod merge;
mod model;
mod overlay;

pub use defaults::default_config;
pub use merge::{overwrite_map, update_config_map};
pub use model::{
    AnalyzerConfig, GlobalScope, IgnoreFilesConfig, IgnoreUpdateMode, LintConfig, RuleConfig,
    SettingValue,
};
pub use overlay::override_config;
