//! Repository for the `capacity_overrides` table.
//!
//! At most one row exists per `(tenant_id, date, resource_key)`; writes are
//! upserts and the last write wins.

use chrono::NaiveDate;
use medcap_core::types::DbId;
use sqlx::PgPool;

use crate::models::capacity_override::{CapacityOverride, UpsertCapacityOverride};

/// Column list for `capacity_overrides` queries.
const COLUMNS: &str = "\
    id, tenant_id, date, resource_key, is_closed, created_at, updated_at";

/// Provides data access for capacity overrides.
pub struct CapacityOverrideRepo;

impl CapacityOverrideRepo {
    /// List overrides for a tenant within an inclusive date window.
    pub async fn list_in_range(
        pool: &PgPool,
        tenant_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CapacityOverride>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM capacity_overrides \
             WHERE tenant_id = $1 AND date BETWEEN $2 AND $3 \
             ORDER BY date, resource_key"
        );
        sqlx::query_as::<_, CapacityOverride>(&query)
            .bind(tenant_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Insert or replace the override for `(tenant_id, date, resource_key)`.
    ///
    /// Uses `ON CONFLICT ... DO UPDATE`, so repeating the same call leaves
    /// the same stored state.
    pub async fn upsert(
        pool: &PgPool,
        tenant_id: DbId,
        dto: &UpsertCapacityOverride,
    ) -> Result<CapacityOverride, sqlx::Error> {
        let query = format!(
            "INSERT INTO capacity_overrides (tenant_id, date, resource_key, is_closed) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (tenant_id, date, resource_key) DO UPDATE SET \
                 is_closed = EXCLUDED.is_closed, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CapacityOverride>(&query)
            .bind(tenant_id)
            .bind(dto.date)
            .bind(&dto.resource_key)
            .bind(dto.is_closed)
            .fetch_one(pool)
            .await
    }
}
