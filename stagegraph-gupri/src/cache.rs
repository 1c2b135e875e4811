//! Persisted natural-key → identifier mappings.
//!
//! The cache is an explicit value object owned by the pipeline
//! orchestrator: loaded fully before any identifier is issued, mutated in
//! memory during the run, and saved atomically (write temp file, then
//! rename) only after the run succeeds. A failed run leaves the previous
//! cache untouched.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::{NAMESPACE_UUID, SCHEMA_VERSION};
use crate::error::{GupriError, Result};

/// On-disk shape of the cache file.
///
/// The namespace and schema version are recorded so a cache produced
/// under a different derivation epoch fails loudly at load time instead
/// of silently minting divergent identifiers.
#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    namespace: String,
    schema_version: String,
    mappings: BTreeMap<String, String>,
}

/// In-memory identifier cache.
///
/// Keys are serialized natural keys (see [`crate::builder::seed_key`]);
/// values are the identifiers issued for them. `BTreeMap` keeps the
/// persisted JSON sorted for diffability.
#[derive(Debug, Default)]
pub struct IdentifierCache {
    mappings: BTreeMap<String, String>,
}

impl IdentifierCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cache from `path`.
    ///
    /// A missing file yields an empty cache (first run). An unreadable
    /// file, or one issued under a different namespace or schema version,
    /// is a fatal error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no identifier cache, starting fresh");
            return Ok(Self::new());
        }

        let text = fs::read_to_string(path)?;
        let file: CacheFile =
            serde_json::from_str(&text).map_err(|e| GupriError::Corrupt {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let expected_ns = NAMESPACE_UUID.to_string();
        if file.namespace != expected_ns {
            return Err(GupriError::NamespaceMismatch {
                path: path.display().to_string(),
                expected: expected_ns,
                found: file.namespace,
            });
        }
        if file.schema_version != SCHEMA_VERSION {
            return Err(GupriError::SchemaMismatch {
                path: path.display().to_string(),
                expected: SCHEMA_VERSION.to_string(),
                found: file.schema_version,
            });
        }

        debug!(
            path = %path.display(),
            entries = file.mappings.len(),
            "loaded identifier cache"
        );
        Ok(Self {
            mappings: file.mappings,
        })
    }

    /// Save the cache to `path` atomically.
    ///
    /// Writes to a sibling temp file first and renames into place, so a
    /// crash mid-write never leaves a truncated cache behind.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = CacheFile {
            namespace: NAMESPACE_UUID.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            mappings: self.mappings.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = std::path::PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        debug!(path = %path.display(), entries = self.mappings.len(), "saved identifier cache");
        Ok(())
    }

    /// Look up a previously issued identifier.
    pub fn get(&self, seed: &str) -> Option<&str> {
        self.mappings.get(seed).map(String::as_str)
    }

    /// Record an issued identifier.
    pub fn insert(&mut self, seed: String, id: String) {
        self.mappings.insert(seed, id);
    }

    /// Number of issued identifiers.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether any identifiers have been issued.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
