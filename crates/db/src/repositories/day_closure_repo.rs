//! Legacy full-day closure sources: `day_closures` and `holidays`.

use chrono::NaiveDate;
use medcap_core::types::DbId;
use sqlx::PgPool;

/// Read access to legacy day-level closures.
pub struct DayClosureRepo;

impl DayClosureRepo {
    /// Distinct dates in the window closed by a day closure record or a
    /// closing holiday.
    pub async fn closed_dates_in_range(
        pool: &PgPool,
        tenant_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar::<_, NaiveDate>(
            "SELECT date FROM day_closures \
             WHERE tenant_id = $1 AND date BETWEEN $2 AND $3 \
             UNION \
             SELECT date FROM holidays \
             WHERE tenant_id = $1 AND date BETWEEN $2 AND $3 AND is_closed \
             ORDER BY date",
        )
        .bind(tenant_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }
}
