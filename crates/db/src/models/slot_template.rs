//! Recurring weekly slot rules.

use chrono::NaiveTime;
use medcap_core::template::WeeklySlotRule;
use medcap_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `slot_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SlotTemplate {
    pub id: DbId,
    pub tenant_id: DbId,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity_per_slot: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SlotTemplate {
    /// The domain rule this row describes.
    pub fn to_rule(&self) -> WeeklySlotRule {
        WeeklySlotRule {
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            capacity_per_slot: self.capacity_per_slot,
        }
    }
}
