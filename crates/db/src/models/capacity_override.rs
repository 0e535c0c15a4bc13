//! Hard open/close overrides per (tenant, date, resource).

use chrono::NaiveDate;
use medcap_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `capacity_overrides` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CapacityOverride {
    pub id: DbId,
    pub tenant_id: DbId,
    pub date: NaiveDate,
    pub resource_key: String,
    pub is_closed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for upserting an override. `resource_key` must already be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpsertCapacityOverride {
    pub date: NaiveDate,
    pub resource_key: String,
    pub is_closed: bool,
}
