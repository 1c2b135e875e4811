//! Error types for identifier cache operations.

use thiserror::Error;

/// Result type for GUPRI operations.
pub type Result<T> = std::result::Result<T, GupriError>;

/// Errors from loading or saving the identifier cache.
///
/// Every variant here is fatal for the run: a cache that cannot be
/// trusted must never be silently replaced, or previously issued
/// identifiers would regenerate divergently.
#[derive(Debug, Error)]
pub enum GupriError {
    /// Cache file exists but is not valid JSON in the expected shape.
    #[error("identifier cache unreadable at {path}: {message}")]
    Corrupt { path: String, message: String },

    /// Cache was written under a different namespace constant.
    #[error(
        "identifier cache at {path} was issued under namespace {found}, \
         this build uses {expected}; refusing to regenerate divergent identifiers"
    )]
    NamespaceMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// Cache was written under a different derivation schema version.
    #[error(
        "identifier cache at {path} uses derivation schema {found}, \
         this build uses {expected}; run a migration before regenerating"
    )]
    SchemaMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// I/O error reading or writing the cache file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
