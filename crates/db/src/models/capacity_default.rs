use medcap_core::availability::basic_default_from;
use medcap_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `capacity_defaults` table.
///
/// `defaults` is a JSON object such as `{"BASIC": 20, "SPECIAL": 4}`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CapacityDefault {
    pub tenant_id: DbId,
    pub defaults: serde_json::Value,
    pub updated_at: Timestamp,
}

impl CapacityDefault {
    /// The `BASIC` fallback capacity, if configured.
    pub fn basic(&self) -> Option<i64> {
        basic_default_from(&self.defaults)
    }
}
