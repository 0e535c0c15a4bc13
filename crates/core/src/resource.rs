//! Resource keys and legacy aliasing.
//!
//! A resource is an examination category with its own closure state. The
//! key set is open (tenants define their own special exams), but a few
//! keys carry meaning:
//!
//! - `basic` drives the closure cascade and is always resolved.
//! - `special` is the admin-facing name for what older data stores as `col`.
//! - `cscope` is a read-side alias that mirrors the state of `col`.

use std::collections::BTreeSet;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// The basic checkup resource. Closing or filling it closes everything.
pub const BASIC: &str = "basic";

/// Gastroscopy.
pub const EGD: &str = "egd";

/// Colonoscopy. Canonical storage key for the `special` resource.
pub const COL: &str = "col";

/// Admin-facing name that is persisted as [`COL`].
pub const SPECIAL: &str = "special";

/// Read-side alias exposed alongside [`COL`].
pub const CSCOPE: &str = "cscope";

/// Maximum length of a resource key.
pub const MAX_RESOURCE_KEY_LEN: usize = 64;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Map a raw resource name onto its canonical storage key.
///
/// Empty input means `basic`. Keys are trimmed and lower-cased, and both
/// `special` and `cscope` collapse onto `col`.
pub fn normalize_key(raw: &str) -> String {
    let key = raw.trim().to_ascii_lowercase();
    match key.as_str() {
        "" => BASIC.to_string(),
        SPECIAL | CSCOPE => COL.to_string(),
        _ => key,
    }
}

/// Normalize and validate a resource key from an admin write.
pub fn validate_key(raw: &str) -> Result<String, CoreError> {
    let key = normalize_key(raw);
    if key.len() > MAX_RESOURCE_KEY_LEN {
        return Err(CoreError::Validation(format!(
            "Resource key must be at most {MAX_RESOURCE_KEY_LEN} characters"
        )));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        return Err(CoreError::Validation(format!(
            "Invalid resource key '{key}'. Allowed characters: a-z, 0-9, '_' and '-'"
        )));
    }
    Ok(key)
}

/// Extra keys under which a resolved resource is published, besides its
/// own. Only `col` has one (`cscope`).
pub fn read_aliases(key: &str) -> &'static [&'static str] {
    match key {
        COL => &[CSCOPE],
        _ => &[],
    }
}

// ---------------------------------------------------------------------------
// Requested resource set
// ---------------------------------------------------------------------------

/// The set of resources a detailed read resolves.
///
/// Always contains `basic`, whatever the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSet {
    keys: BTreeSet<String>,
}

impl ResourceSet {
    /// A set containing only `basic`.
    pub fn basic_only() -> Self {
        let mut keys = BTreeSet::new();
        keys.insert(BASIC.to_string());
        Self { keys }
    }

    /// Parse a comma-separated `resources` query value.
    ///
    /// Blank entries are skipped; `basic` is injected when missing.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        let mut set = Self::basic_only();
        for part in raw.unwrap_or_default().split(',') {
            if part.trim().is_empty() {
                continue;
            }
            set.keys.insert(validate_key(part)?);
        }
        Ok(set)
    }

    /// Iterate over canonical keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
