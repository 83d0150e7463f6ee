//! Scope paths.
//!
//! A scope path is an ordered, non-empty sequence of path components. It is
//! independent of the platform separator: `C:/Dog/Goat` and `C:\Dog\Goat`
//! parse to the same value. Two paths are equal exactly when their component
//! sequences are equal, and path A contains path B when A's components are a
//! prefix of B's.

use serde::{Deserialize, Serialize};
use std::path::Component;

/// Errors raised while constructing a scope path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopePathError {
    #[error("scope path has no components")]
    Empty,

    #[error("scope path contains an empty component")]
    EmptyComponent,
}

/// An ordered, non-empty sequence of path components.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopePath {
    components: Vec<String>,
}

impl ScopePath {
    /// Build a scope path from explicit components.
    ///
    /// Rejects an empty sequence and empty components; this is the only
    /// place malformed paths are caught, so every operation downstream is
    /// total.
    pub fn new<I, S>(components: I) -> Result<Self, ScopePathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        if components.is_empty() {
            return Err(ScopePathError::Empty);
        }
        if components.iter().any(String::is_empty) {
            return Err(ScopePathError::EmptyComponent);
        }
        Ok(Self { components })
    }

    /// Parse a path string, splitting on `/` and `\` and dropping empty
    /// entries (so trailing separators are harmless).
    pub fn parse(text: &str) -> Result<Self, ScopePathError> {
        Self::new(
            text.split(['/', '\\'])
                .filter(|part| !part.is_empty())
                .map(str::to_string),
        )
    }

    /// Convert an OS path. Root and current-dir markers carry no component
    /// content and are dropped; a Windows drive prefix becomes a plain
    /// component (`C:`).
    pub fn from_std_path(path: &std::path::Path) -> Result<Self, ScopePathError> {
        let components = path.components().filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::Prefix(prefix) => Some(prefix.as_os_str().to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::CurDir => None,
        });
        Self::new(components)
    }

    /// The components, in order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Number of components.
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    /// Whether this path's components are a prefix of `other`'s (i.e. this
    /// path is `other` or one of its ancestors).
    pub fn is_prefix_of(&self, other: &ScopePath) -> bool {
        self.components.len() <= other.components.len()
            && self.components == other.components[..self.components.len()]
    }

    /// All prefixes of this path, shortest first, ending with the path
    /// itself.
    pub fn prefixes(&self) -> impl Iterator<Item = ScopePath> + '_ {
        (1..=self.components.len()).map(|len| ScopePath {
            components: self.components[..len].to_vec(),
        })
    }

    /// The path with the final component removed, if any components remain.
    pub fn parent(&self) -> Option<ScopePath> {
        if self.components.len() < 2 {
            return None;
        }
        Some(ScopePath {
            components: self.components[..self.components.len() - 1].to_vec(),
        })
    }

    /// Longest prefix shared with `other`, if the leading components agree
    /// at all.
    pub fn common_prefix(&self, other: &ScopePath) -> Option<ScopePath> {
        let shared = self
            .components
            .iter()
            .zip(other.components.iter())
            .take_while(|(a, b)| a == b)
            .count();
        if shared == 0 {
            return None;
        }
        Some(ScopePath {
            components: self.components[..shared].to_vec(),
        })
    }
}

impl std::fmt::Display for ScopePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.components.join("/"))
    }
}

impl std::str::FromStr for ScopePath {
    type Err = ScopePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ScopePath {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScopePath {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
