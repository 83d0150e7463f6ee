//! Configuration document discovery
//!
//! Walks a source tree looking for per-directory `srclint.toml` documents
//! and builds the scope tree they imply. Directories matching the skip
//! rules are pruned wholesale; an unreadable or malformed document is
//! logged and skipped so one bad file cannot take discovery down.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

use super::{ConfigDocument, DOCUMENT_NAME};
use crate::tree::{ScopePath, ScopeTree};

/// Directories never worth descending into.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    ".git",
    "**/.git",
    "target",
    "**/target",
    "node_modules",
    "**/node_modules",
    "obj",
    "**/obj",
    "bin",
    "**/bin",
];

/// Errors raised while compiling skip rules.
#[derive(Debug, thiserror::Error)]
pub enum WalkRulesError {
    #[error("invalid skip pattern: {0}")]
    Pattern(#[from] globset::Error),
}

/// Compiled skip rules for the discovery walk.
#[derive(Debug)]
pub struct WalkRules {
    glob_set: GlobSet,
}

impl WalkRules {
    /// The default skip rules.
    pub fn new() -> Result<Self, WalkRulesError> {
        Self::with_patterns(&[])
    }

    /// Default skip rules plus additional caller-supplied patterns.
    pub fn with_patterns(patterns: &[&str]) -> Result<Self, WalkRulesError> {
        let mut builder = GlobSetBuilder::new();

        for pattern in DEFAULT_SKIP_DIRS {
            builder.add(Glob::new(pattern)?);
        }
        for pattern in patterns {
            if !pattern.is_empty() {
                builder.add(Glob::new(pattern)?);
            }
        }

        Ok(Self {
            glob_set: builder.build()?,
        })
    }

    /// Whether the walk should prune `path` (relative to the walk root).
    pub fn skips(&self, path: &Path) -> bool {
        self.glob_set.is_match(path)
    }
}

/// Find every directory under `root` carrying a configuration document.
pub fn discover_documents(root: &Path, rules: &WalkRules) -> BTreeMap<ScopePath, ConfigDocument> {
    let mut documents = BTreeMap::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !rules.skips(entry.path().strip_prefix(root).unwrap_or(entry.path()))
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("discovery: skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let document_path = entry.path().join(DOCUMENT_NAME);
        if !document_path.is_file() {
            continue;
        }

        let scope = match ScopePath::from_std_path(entry.path()) {
            Ok(scope) => scope,
            Err(err) => {
                log::warn!(
                    "discovery: cannot address {}: {err}",
                    entry.path().display()
                );
                continue;
            }
        };

        match ConfigDocument::load(&document_path) {
            Ok(document) => {
                log::debug!("discovery: registered {scope} from {}", document_path.display());
                documents.insert(scope, document);
            }
            Err(err) => {
                log::warn!("discovery: skipping {}: {err}", document_path.display());
            }
        }
    }

    documents
}

/// Build the scope tree implied by a set of discovered documents.
///
/// Paths are registered in sorted order, so a given document set always
/// produces the same tree.
pub fn tree_from_documents(documents: &BTreeMap<ScopePath, ConfigDocument>) -> ScopeTree {
    let mut tree = ScopeTree::new();
    for scope in documents.keys() {
        tree.add_path(scope.clone(), |prefix| {
            documents.get(prefix).map(|document| document.config.clone())
        });
    }
    tree
}
