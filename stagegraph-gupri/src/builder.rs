//! Deterministic identifier derivation.
//!
//! Identifiers have the shape `sg:<EntityType>_<hint>_<token>` where the
//! token is the first eight hex digits of a UUIDv5 derived from
//! [`NAMESPACE_UUID`] and the serialized natural key. The hint is an
//! optional human-readable fragment and carries no identity: two hints for
//! the same key can never coexist because the cache returns the first
//! minted identifier verbatim.

use uuid::Uuid;

use crate::cache::IdentifierCache;

/// Namespace constant seeding every identifier derivation.
///
/// Checked into source and never regenerated; changing it (or
/// [`SCHEMA_VERSION`]) invalidates every identifier ever issued and
/// requires an explicit migration pass over the cache.
pub const NAMESPACE_UUID: Uuid = Uuid::from_u128(0x3f2d_9a74_61c5_4e8b_9d0f_7b4a_2c8e_1d56);

/// Derivation schema version recorded alongside the namespace in the
/// cache file. Bump only together with a cache migration.
pub const SCHEMA_VERSION: &str = "gupri-v1";

/// Prefix used for all minted identifiers.
const ID_PREFIX: &str = "sg";

/// Sentinel key component for rows whose natural key is entirely empty.
const UNNAMED: &str = "unnamed";

/// Maximum length of the readable hint embedded in an identifier.
const MAX_HINT_LEN: usize = 20;

/// Serialize a natural key into the deterministic seed string.
///
/// Empty and whitespace-only parts are dropped; a key with no usable
/// content degrades to the `unnamed` sentinel rather than failing, so
/// malformed source rows still map somewhere stable.
pub fn seed_key(entity_type: &str, key_parts: &[&str]) -> String {
    let ty = entity_type.trim();
    let ty = if ty.is_empty() { UNNAMED } else { ty };

    let mut parts: Vec<&str> = vec![ty];
    parts.extend(key_parts.iter().map(|p| p.trim()).filter(|p| !p.is_empty()));
    if parts.len() == 1 {
        parts.push(UNNAMED);
    }
    parts.join(":")
}

/// Look up or mint the identifier for a natural key.
///
/// Cache hits return the stored identifier unchanged, bypassing
/// derivation entirely — this is what keeps identifiers stable across
/// runs even if the derivation scheme later changes.
pub fn build_id(
    cache: &mut IdentifierCache,
    entity_type: &str,
    key_parts: &[&str],
    readable_hint: Option<&str>,
) -> String {
    let seed = seed_key(entity_type, key_parts);
    if let Some(existing) = cache.get(&seed) {
        return existing.to_string();
    }

    let ty = entity_type.trim();
    let ty = if ty.is_empty() { UNNAMED } else { ty };
    let token = derive_token(&seed);

    let hint = readable_hint.map(sanitize_hint).filter(|h| !h.is_empty());
    let id = match hint {
        Some(hint) => format!("{ID_PREFIX}:{ty}_{hint}_{token}"),
        None => format!("{ID_PREFIX}:{ty}_{token}"),
    };

    cache.insert(seed, id.clone());
    id
}

/// Derive the opaque identifier token from a seed string.
fn derive_token(seed: &str) -> String {
    let uuid = Uuid::new_v5(&NAMESPACE_UUID, seed.as_bytes());
    uuid.simple().to_string()[..8].to_string()
}

/// Reduce a readable hint to lowercase `[a-z0-9_]`, capped at
/// [`MAX_HINT_LEN`] characters.
fn sanitize_hint(hint: &str) -> String {
    let mut out = String::with_capacity(MAX_HINT_LEN);
    let mut pending_sep = false;

    for ch in hint.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
        if out.len() >= MAX_HINT_LEN {
            break;
        }
    }

    out.truncate(MAX_HINT_LEN);
    while out.ends_with('_') {
        out.pop();
    }
    out
}
