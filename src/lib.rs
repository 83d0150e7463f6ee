//! srclint-scope - Configuration resolution for source linting
//!
//! This crate decides which configuration applies at a given location in an
//! analyzed source tree. Configuration can be declared per directory and at
//! named global scopes; resolution layers every applicable declaration,
//! most specific last, into one effective configuration. A companion
//! engine, `srclint-ignore`, decides whether a file is excluded from
//! analysis at all.

pub mod config;
pub mod document;
pub mod resolve;
pub mod tree;

pub use config::{default_config, override_config, GlobalScope, LintConfig};
pub use document::{ConfigDocument, DocumentError};
pub use resolve::{resolve, ResolvedConfig};
pub use tree::{ScopePath, ScopeTree};
