//! GUPRI generation for stagegraph.
//!
//! A GUPRI (Globally Unique, Persistent, Resolvable Identifier) is minted
//! once per natural key and then reused forever. Derivation is a
//! namespace-seeded UUIDv5 over the serialized key, so identical keys
//! always derive the same identifier; the [`IdentifierCache`] makes the
//! assignment durable across runs even if the derivation scheme evolves.
//!
//! # Example
//!
//! ```
//! use stagegraph_gupri::{build_id, IdentifierCache};
//!
//! let mut cache = IdentifierCache::new();
//! let a = build_id(&mut cache, "Stage", &["Protein", "0"], Some("protein 0"));
//! let b = build_id(&mut cache, "Stage", &["Protein", "0"], Some("protein 0"));
//! assert_eq!(a, b);
//! assert!(a.starts_with("sg:Stage_"));
//! ```

pub mod builder;
pub mod cache;
pub mod error;

pub use builder::{build_id, seed_key, NAMESPACE_UUID, SCHEMA_VERSION};
pub use cache::IdentifierCache;
pub use error::{GupriError, Result};
