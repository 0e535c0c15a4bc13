//! Availability resolution.
//!
//! Combines template capacity, the tenant's default capacity, hard
//! overrides and active booking counts into a per-day, per-resource state.
//! Everything here is a pure function of a [`CapacitySnapshot`]: resolving
//! the same snapshot twice yields identical output.
//!
//! The closure cascade:
//!
//! ```text
//! closed[basic] = hard_closed[basic] || full
//! closed[r]     = closed[basic]      || hard_closed[r]
//! ```
//!
//! Closing or filling `basic` closes everything on that date; closing any
//! other resource closes only that resource.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{day_of_week, DateRange, Month};
use crate::resource::{self, ResourceSet, BASIC};
use crate::template::{weekly_capacity, WeeklySlotRule};

/// Capacity used when neither a template nor a default is configured.
pub const SENTINEL_CAPACITY: i64 = 999;

/// Key of the tenant default that backs the basic resource.
pub const DEFAULT_BASIC_KEY: &str = "BASIC";

// ---------------------------------------------------------------------------
// Override index
// ---------------------------------------------------------------------------

/// Hard open/close decisions for a tenant over some window.
///
/// Keys are normalized on insert, so `special` and `col` land on the same
/// entry. When the same `(date, key)` is recorded twice the later record
/// wins. Legacy full-day closures (day closure records, holidays) only
/// ever close `basic`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideIndex {
    explicit: BTreeMap<(NaiveDate, String), bool>,
    legacy_closed: BTreeSet<NaiveDate>,
}

impl OverrideIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an explicit override for `(date, resource_key)`.
    pub fn record(&mut self, date: NaiveDate, resource_key: &str, is_closed: bool) {
        self.explicit
            .insert((date, resource::normalize_key(resource_key)), is_closed);
    }

    /// Record a legacy day-level closure for `date`.
    pub fn close_day(&mut self, date: NaiveDate) {
        self.legacy_closed.insert(date);
    }

    /// The explicit override for `(date, resource_key)`, if any.
    ///
    /// `None` means no decision was recorded, which is not the same as an
    /// explicit `Some(false)` even though both leave the resource open.
    pub fn explicit(&self, date: NaiveDate, resource_key: &str) -> Option<bool> {
        self.explicit
            .get(&(date, resource::normalize_key(resource_key)))
            .copied()
    }

    /// Whether `resource_key` is hard-closed on `date`.
    pub fn is_hard_closed(&self, date: NaiveDate, resource_key: &str) -> bool {
        let key = resource::normalize_key(resource_key);
        let legacy = key == BASIC && self.legacy_closed.contains(&date);
        legacy || self.explicit(date, &key).unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Everything the resolver needs for one tenant and one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacitySnapshot {
    /// Aggregate template capacity per weekday (Sunday = 0).
    pub weekly_capacity: [i64; 7],
    /// `BASIC` entry of the tenant defaults, if configured.
    pub basic_default: Option<i64>,
    pub overrides: OverrideIndex,
    /// Active booking count per date; missing dates count as 0.
    pub booking_counts: BTreeMap<NaiveDate, i64>,
}

impl CapacitySnapshot {
    pub fn new(rules: &[WeeklySlotRule], basic_default: Option<i64>) -> Self {
        Self {
            weekly_capacity: weekly_capacity(rules),
            basic_default,
            overrides: OverrideIndex::new(),
            booking_counts: BTreeMap::new(),
        }
    }

    /// Daily capacity for `date`: template sum, else default, else sentinel.
    pub fn capacity_on(&self, date: NaiveDate) -> i64 {
        let template = usize::try_from(day_of_week(date))
            .ok()
            .and_then(|dow| self.weekly_capacity.get(dow).copied())
            .unwrap_or(0);
        if template > 0 {
            return template;
        }
        match self.basic_default {
            Some(default) if default > 0 => default,
            _ => SENTINEL_CAPACITY,
        }
    }

    /// Active bookings on `date`, shared by every resource.
    pub fn used_on(&self, date: NaiveDate) -> i64 {
        self.booking_counts.get(&date).copied().unwrap_or(0).max(0)
    }
}

/// Read the `BASIC` entry from a tenant's JSON defaults object.
pub fn basic_default_from(defaults: &serde_json::Value) -> Option<i64> {
    defaults.get(DEFAULT_BASIC_KEY).and_then(serde_json::Value::as_i64)
}

// ---------------------------------------------------------------------------
// Resolved state
// ---------------------------------------------------------------------------

/// Resolved state of one resource on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayResourceState {
    pub cap: i64,
    pub used: i64,
    pub closed: bool,
}

/// Coarse per-day status used by the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    Open,
    Closed,
}

/// Resolved resources for one date, keyed by published resource key.
pub type DayResources = BTreeMap<String, DayResourceState>;

/// Whether `basic` is closed on `date`, by override or by being full.
pub fn basic_closed(snapshot: &CapacitySnapshot, date: NaiveDate) -> bool {
    let cap = snapshot.capacity_on(date);
    let used = snapshot.used_on(date);
    let full = cap > 0 && used >= cap;
    snapshot.overrides.is_hard_closed(date, BASIC) || full
}

/// Resolve every requested resource on a single date.
///
/// `col` is published a second time under its `cscope` alias with an
/// identical value.
pub fn resolve_day(
    snapshot: &CapacitySnapshot,
    date: NaiveDate,
    resources: &ResourceSet,
) -> DayResources {
    let cap = snapshot.capacity_on(date);
    let used = snapshot.used_on(date);
    let closed_basic = basic_closed(snapshot, date);

    let mut day = BTreeMap::new();
    for key in resources.iter() {
        let closed = if key == BASIC {
            closed_basic
        } else {
            closed_basic || snapshot.overrides.is_hard_closed(date, key)
        };
        let state = DayResourceState { cap, used, closed };
        for alias in resource::read_aliases(key) {
            day.insert((*alias).to_string(), state);
        }
        day.insert(key.to_string(), state);
    }
    day
}

/// Resolve the detailed view for every date in `range`.
pub fn resolve_range(
    snapshot: &CapacitySnapshot,
    range: DateRange,
    resources: &ResourceSet,
) -> BTreeMap<NaiveDate, DayResources> {
    range
        .days()
        .map(|date| (date, resolve_day(snapshot, date, resources)))
        .collect()
}

/// Resolve the month view: basic OPEN/CLOSED for every day of the month.
///
/// Overrides on other resources are not surfaced at this granularity.
pub fn resolve_month(snapshot: &CapacitySnapshot, month: Month) -> BTreeMap<NaiveDate, DayStatus> {
    month
        .range()
        .days()
        .map(|date| {
            let status = if basic_closed(snapshot, date) {
                DayStatus::Closed
            } else {
                DayStatus::Open
            };
            (date, status)
        })
        .collect()
}
