use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Aggregate row: active bookings on one date.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DailyBookingCount {
    pub date: NaiveDate,
    pub count: i64,
}
