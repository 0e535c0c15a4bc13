//! Repository for the `slot_templates` table (read-only to the engine).

use medcap_core::types::DbId;
use sqlx::PgPool;

use crate::models::slot_template::SlotTemplate;

const COLUMNS: &str = "\
    id, tenant_id, day_of_week, start_time, end_time, capacity_per_slot, \
    created_at, updated_at";

/// Provides data access for weekly slot templates.
pub struct SlotTemplateRepo;

impl SlotTemplateRepo {
    /// List every template for a tenant, ordered by weekday then start time.
    pub async fn list_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
    ) -> Result<Vec<SlotTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM slot_templates \
             WHERE tenant_id = $1 \
             ORDER BY day_of_week, start_time, id"
        );
        sqlx::query_as::<_, SlotTemplate>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }
}
