//! Content digests for conditional-GET support.
//!
//! The ETag is a cache-freshness signal, not a security boundary.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Build a weak entity tag (`W/"<digest>"`) for a serialized body.
pub fn weak_etag(body: &[u8]) -> String {
    format!("W/\"{}\"", sha256_hex(body))
}

/// Strip the weak prefix and surrounding quotes from an entity tag.
///
/// `W/"abc"`, `"abc"` and `abc` all yield `abc`.
pub fn opaque_tag(tag: &str) -> &str {
    let tag = tag.trim();
    let tag = tag.strip_prefix("W/").unwrap_or(tag);
    tag.trim_matches('"')
}

/// Returns `true` if an `If-None-Match` header value matches `etag`.
///
/// Uses the weak comparison from RFC 9110: the `W/` prefix is ignored on
/// both sides. A comma-separated list matches if any member matches, and
/// `*` matches everything.
pub fn if_none_match(header_value: &str, etag: &str) -> bool {
    let current = opaque_tag(etag);
    header_value
        .split(',')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .any(|candidate| candidate == "*" || opaque_tag(candidate) == current)
}
