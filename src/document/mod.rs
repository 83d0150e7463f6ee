//! Configuration documents
//!
//! Loads and validates the on-disk TOML documents (`srclint.toml`) that
//! declare per-directory configuration. A loaded document keeps the SHA-256
//! digest of its raw bytes so reports can state exactly which file contents
//! produced a resolution.

mod discover;

pub use discover::{
    discover_documents, tree_from_documents, WalkRules, WalkRulesError, DEFAULT_SKIP_DIRS,
};

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::config::LintConfig;
use srclint_ignore::PatternError;

/// File name of a per-directory configuration document.
pub const DOCUMENT_NAME: &str = "srclint.toml";

/// Errors that can occur when loading a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("configuration document not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("malformed ignore pattern in {path}: {source}")]
    Pattern {
        path: PathBuf,
        source: PatternError,
    },
}

/// A parsed configuration document with provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigDocument {
    /// Where the document was read from.
    pub path: PathBuf,

    /// The parsed configuration.
    pub config: LintConfig,

    /// SHA-256 digest of the raw file bytes, hex-encoded.
    pub digest: String,
}

impl ConfigDocument {
    /// Load a document from a specific path.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        if !path.exists() {
            return Err(DocumentError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        let digest = hex::encode(Sha256::digest(&bytes));
        let text = String::from_utf8(bytes).map_err(|err| {
            DocumentError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
        })?;

        let config: LintConfig = toml::from_str(&text)?;
        Self::validate(path, &config)?;

        Ok(Self {
            path: path.to_path_buf(),
            config,
            digest,
        })
    }

    /// Reject documents whose ignore patterns cannot be tokenized; once a
    /// document loads, everything downstream is total.
    fn validate(path: &Path, config: &LintConfig) -> Result<(), DocumentError> {
        if let Some(ignore) = &config.ignore_files {
            ignore
                .parsed_patterns()
                .map_err(|source| DocumentError::Pattern {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        Ok(())
    }
}
