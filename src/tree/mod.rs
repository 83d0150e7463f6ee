//! Scope tree registry
//!
//! Tracks which directories have been associated with configuration. The
//! tree is a plain map keyed by full component sequence: registering a path
//! also creates an entry for every ancestor prefix, so prefix reasoning
//! never needs a trie. Entries created only as ancestors are scaffolding;
//! the `registered` list remembers which paths callers registered
//! explicitly, most recent first.

mod path;

pub use path::{ScopePath, ScopePathError};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::LintConfig;

/// Registry of configuration-bearing scopes, keyed by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeTree {
    /// Every known scope, scaffolding included. `None` means the entry
    /// exists only as an ancestor and carries no configuration.
    entries: BTreeMap<ScopePath, Option<LintConfig>>,

    /// Explicitly registered paths, most recently added first.
    registered: Vec<ScopePath>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path`, creating entries for it and every ancestor prefix.
    ///
    /// `config_lookup` is consulted once per freshly created entry; entries
    /// that already exist keep their configuration untouched, so re-adding
    /// a path never clobbers earlier state.
    pub fn add_path<F>(&mut self, path: ScopePath, config_lookup: F)
    where
        F: Fn(&ScopePath) -> Option<LintConfig>,
    {
        for prefix in path.prefixes() {
            if !self.entries.contains_key(&prefix) {
                let config = config_lookup(&prefix);
                self.entries.insert(prefix, config);
            }
        }
        self.registered.insert(0, path);
    }

    /// Unregister `path` and drop every entry that is no longer an ancestor
    /// of (or equal to) a still-registered path.
    ///
    /// Removing a leaf may cascade up through scaffolding that only existed
    /// for it; ancestors still supporting another registered path survive,
    /// configuration included.
    pub fn remove_path(&mut self, path: &ScopePath) {
        self.registered.retain(|registered| registered != path);
        let prefixes: Vec<ScopePath> = path.prefixes().collect();
        for prefix in prefixes.iter().rev() {
            let load_bearing = self
                .registered
                .iter()
                .any(|registered| prefix.is_prefix_of(registered));
            if !load_bearing {
                self.entries.remove(prefix);
            }
        }
    }

    /// The resolution key to use for `query`.
    ///
    /// When `query` is an ancestor of (or equal to) a registered path it is
    /// directly usable. Otherwise fall back to the longest prefix shared by
    /// every registered path, the broadest scope the registry knows; `None`
    /// when the registry is empty or its paths share no leading component.
    pub fn common_path(&self, query: &ScopePath) -> Option<ScopePath> {
        if self
            .registered
            .iter()
            .any(|registered| query.is_prefix_of(registered))
        {
            return Some(query.clone());
        }

        let mut paths = self.registered.iter();
        let first = paths.next()?.clone();
        paths.try_fold(first, |shared, path| shared.common_prefix(path))
    }

    /// The configuration declared at exactly `path`, if any.
    pub fn config_at(&self, path: &ScopePath) -> Option<&LintConfig> {
        self.entries.get(path)?.as_ref()
    }

    /// Whether `path` has an entry, scaffolding included.
    pub fn contains(&self, path: &ScopePath) -> bool {
        self.entries.contains_key(path)
    }

    /// Explicitly registered paths, most recently added first.
    pub fn registered(&self) -> &[ScopePath] {
        &self.registered
    }

    /// All entries in key order, scaffolding included.
    pub fn entries(&self) -> impl Iterator<Item = (&ScopePath, Option<&LintConfig>)> + '_ {
        self.entries
            .iter()
            .map(|(path, config)| (path, config.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
