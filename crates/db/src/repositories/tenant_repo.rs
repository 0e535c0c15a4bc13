//! Repository for the `tenants` table.

use sqlx::PgPool;

use crate::models::tenant::Tenant;

/// Column list for `tenants` queries.
const COLUMNS: &str = "id, slug, name, created_at, updated_at";

/// Provides data access for tenants.
pub struct TenantRepo;

impl TenantRepo {
    /// Find a tenant by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE slug = $1");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
