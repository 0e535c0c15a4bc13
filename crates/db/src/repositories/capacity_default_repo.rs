//! Repository for the `capacity_defaults` table (read-only to the engine).

use medcap_core::types::DbId;
use sqlx::PgPool;

use crate::models::capacity_default::CapacityDefault;

const COLUMNS: &str = "tenant_id, defaults, updated_at";

/// Provides data access for tenant default capacities.
pub struct CapacityDefaultRepo;

impl CapacityDefaultRepo {
    /// Get the defaults row for a tenant.
    ///
    /// Returns `None` if the tenant never saved defaults.
    pub async fn find_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
    ) -> Result<Option<CapacityDefault>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM capacity_defaults WHERE tenant_id = $1");
        sqlx::query_as::<_, CapacityDefault>(&query)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }
}
