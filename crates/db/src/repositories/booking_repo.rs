//! Read-only aggregates over the `bookings` table.

use chrono::NaiveDate;
use medcap_core::booking::ACTIVE_BOOKING_STATUSES;
use medcap_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::DailyBookingCount;

/// Counts bookings for capacity accounting. Never writes.
pub struct BookingRepo;

impl BookingRepo {
    /// Count active bookings per date within an inclusive window.
    ///
    /// Dates with no active bookings are omitted. No locks are taken; the
    /// result is a point-in-time snapshot.
    pub async fn count_active_by_date(
        pool: &PgPool,
        tenant_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyBookingCount>, sqlx::Error> {
        let statuses: Vec<String> = ACTIVE_BOOKING_STATUSES
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        sqlx::query_as::<_, DailyBookingCount>(
            "SELECT date, COUNT(*) AS count FROM bookings \
             WHERE tenant_id = $1 AND date BETWEEN $2 AND $3 AND status = ANY($4) \
             GROUP BY date \
             ORDER BY date",
        )
        .bind(tenant_id)
        .bind(from)
        .bind(to)
        .bind(statuses)
        .fetch_all(pool)
        .await
    }
}
