//! Weekly slot template expansion.
//!
//! A tenant describes its recurring week as a list of rules ("every
//! Wednesday 09:00-12:00, 3 people per slot"). Each rule is cut into
//! fixed 30-minute slots. Rules for the same weekday add up.

use std::collections::BTreeMap;

use chrono::{NaiveTime, TimeDelta};
use serde::{Serialize, Serializer};

/// Width of one bookable slot, in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// One recurring weekly rule, as loaded from the `slot_templates` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySlotRule {
    /// Sunday = 0 .. Saturday = 6.
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity_per_slot: i32,
}

impl WeeklySlotRule {
    /// Number of whole 30-minute slots in `[start_time, end_time)`.
    ///
    /// Inverted or empty windows yield 0; a trailing partial slot is dropped.
    pub fn slot_count(&self) -> i64 {
        if self.end_time <= self.start_time {
            return 0;
        }
        (self.end_time - self.start_time).num_minutes() / SLOT_MINUTES
    }

    /// Aggregate capacity this rule contributes to its weekday.
    pub fn capacity(&self) -> i64 {
        if self.capacity_per_slot <= 0 {
            return 0;
        }
        self.slot_count() * i64::from(self.capacity_per_slot)
    }

    fn slot_starts(&self) -> impl Iterator<Item = NaiveTime> + '_ {
        (0..self.slot_count()).map(move |i| self.start_time + TimeDelta::minutes(i * SLOT_MINUTES))
    }
}

/// Capacity of a single 30-minute slot after merging all rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCapacity {
    #[serde(serialize_with = "serialize_hhmm")]
    pub start: NaiveTime,
    pub capacity: i64,
}

/// Expanded schedule for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub day_of_week: i16,
    pub total_capacity: i64,
    pub slots: Vec<SlotCapacity>,
}

/// Expand every rule matching `day_of_week` into a sorted slot list.
///
/// Slots that start at the same time in several rules are merged and their
/// capacities summed. `total_capacity` is 0 when nothing matches, which the
/// resolver treats as "no template".
pub fn expand_day(rules: &[WeeklySlotRule], day_of_week: i16) -> DaySchedule {
    let mut by_start: BTreeMap<NaiveTime, i64> = BTreeMap::new();
    let mut total_capacity = 0;

    for rule in rules.iter().filter(|r| r.day_of_week == day_of_week) {
        let capacity = rule.capacity();
        if capacity == 0 {
            continue;
        }
        total_capacity += capacity;
        for start in rule.slot_starts() {
            *by_start.entry(start).or_default() += i64::from(rule.capacity_per_slot);
        }
    }

    DaySchedule {
        day_of_week,
        total_capacity,
        slots: by_start
            .into_iter()
            .map(|(start, capacity)| SlotCapacity { start, capacity })
            .collect(),
    }
}

/// Aggregate capacity for each weekday, indexed Sunday = 0 .. Saturday = 6.
pub fn weekly_capacity(rules: &[WeeklySlotRule]) -> [i64; 7] {
    let mut week = [0i64; 7];
    for rule in rules {
        if let Some(slot) = usize::try_from(rule.day_of_week)
            .ok()
            .and_then(|dow| week.get_mut(dow))
        {
            *slot += rule.capacity();
        }
    }
    week
}

fn serialize_hhmm<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format("%H:%M").to_string())
}
