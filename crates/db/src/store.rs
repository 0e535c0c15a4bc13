//! Tenant-scoped capacity store.
//!
//! [`CapacityStore`] is the seam between the HTTP layer and persistence.
//! Every method takes the tenant explicitly; there is no ambient tenant
//! context. [`PgCapacityStore`] delegates to the repositories, and tests
//! substitute an in-memory implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use medcap_core::availability::CapacitySnapshot;
use medcap_core::calendar::DateRange;
use medcap_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::DailyBookingCount;
use crate::models::capacity_default::CapacityDefault;
use crate::models::capacity_override::{CapacityOverride, UpsertCapacityOverride};
use crate::models::slot_template::SlotTemplate;
use crate::models::tenant::Tenant;
use crate::repositories::{
    BookingRepo, CapacityDefaultRepo, CapacityOverrideRepo, DayClosureRepo, SlotTemplateRepo,
    TenantRepo,
};

/// Data access required by the capacity engine.
#[async_trait]
pub trait CapacityStore: Send + Sync {
    /// Resolve a tenant from its URL slug.
    async fn find_tenant(&self, slug: &str) -> Result<Option<Tenant>, sqlx::Error>;

    /// Every weekly slot template of the tenant.
    async fn slot_templates(&self, tenant_id: DbId) -> Result<Vec<SlotTemplate>, sqlx::Error>;

    /// The tenant's default capacities, if configured.
    async fn capacity_default(
        &self,
        tenant_id: DbId,
    ) -> Result<Option<CapacityDefault>, sqlx::Error>;

    /// Stored overrides within the window, ordered by date then resource key.
    async fn overrides_in_range(
        &self,
        tenant_id: DbId,
        range: DateRange,
    ) -> Result<Vec<CapacityOverride>, sqlx::Error>;

    /// Dates in the window closed by a legacy day-level source.
    async fn legacy_closed_dates(
        &self,
        tenant_id: DbId,
        range: DateRange,
    ) -> Result<Vec<NaiveDate>, sqlx::Error>;

    /// Active booking counts per date within the window.
    async fn active_booking_counts(
        &self,
        tenant_id: DbId,
        range: DateRange,
    ) -> Result<Vec<DailyBookingCount>, sqlx::Error>;

    /// Insert or replace one override; returns the stored row.
    async fn upsert_override(
        &self,
        tenant_id: DbId,
        input: &UpsertCapacityOverride,
    ) -> Result<CapacityOverride, sqlx::Error>;
}

// ---------------------------------------------------------------------------
// PostgreSQL implementation
// ---------------------------------------------------------------------------

/// [`CapacityStore`] backed by the PostgreSQL repositories.
#[derive(Debug, Clone)]
pub struct PgCapacityStore {
    pool: PgPool,
}

impl PgCapacityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CapacityStore for PgCapacityStore {
    async fn find_tenant(&self, slug: &str) -> Result<Option<Tenant>, sqlx::Error> {
        TenantRepo::find_by_slug(&self.pool, slug).await
    }

    async fn slot_templates(&self, tenant_id: DbId) -> Result<Vec<SlotTemplate>, sqlx::Error> {
        SlotTemplateRepo::list_for_tenant(&self.pool, tenant_id).await
    }

    async fn capacity_default(
        &self,
        tenant_id: DbId,
    ) -> Result<Option<CapacityDefault>, sqlx::Error> {
        CapacityDefaultRepo::find_for_tenant(&self.pool, tenant_id).await
    }

    async fn overrides_in_range(
        &self,
        tenant_id: DbId,
        range: DateRange,
    ) -> Result<Vec<CapacityOverride>, sqlx::Error> {
        CapacityOverrideRepo::list_in_range(&self.pool, tenant_id, range.from, range.to).await
    }

    async fn legacy_closed_dates(
        &self,
        tenant_id: DbId,
        range: DateRange,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        DayClosureRepo::closed_dates_in_range(&self.pool, tenant_id, range.from, range.to).await
    }

    async fn active_booking_counts(
        &self,
        tenant_id: DbId,
        range: DateRange,
    ) -> Result<Vec<DailyBookingCount>, sqlx::Error> {
        BookingRepo::count_active_by_date(&self.pool, tenant_id, range.from, range.to).await
    }

    async fn upsert_override(
        &self,
        tenant_id: DbId,
        input: &UpsertCapacityOverride,
    ) -> Result<CapacityOverride, sqlx::Error> {
        let stored = CapacityOverrideRepo::upsert(&self.pool, tenant_id, input).await?;
        tracing::debug!(
            tenant_id,
            date = %stored.date,
            resource_key = %stored.resource_key,
            is_closed = stored.is_closed,
            "Capacity override upserted"
        );
        Ok(stored)
    }
}

// ---------------------------------------------------------------------------
// Snapshot loading
// ---------------------------------------------------------------------------

/// Load everything the resolver needs for one tenant and window.
///
/// The five reads are issued concurrently. Any failure fails the whole
/// load; no partial snapshot is ever returned. Rows outside `range` are
/// dropped.
pub async fn load_snapshot(
    store: &dyn CapacityStore,
    tenant_id: DbId,
    range: DateRange,
) -> Result<CapacitySnapshot, sqlx::Error> {
    let (templates, default, overrides, legacy_closed, booking_counts) = tokio::try_join!(
        store.slot_templates(tenant_id),
        store.capacity_default(tenant_id),
        store.overrides_in_range(tenant_id, range),
        store.legacy_closed_dates(tenant_id, range),
        store.active_booking_counts(tenant_id, range),
    )?;

    let rules: Vec<_> = templates.iter().map(SlotTemplate::to_rule).collect();
    let basic_default = default.as_ref().and_then(CapacityDefault::basic);
    let mut snapshot = CapacitySnapshot::new(&rules, basic_default);

    for row in overrides.iter().filter(|row| range.contains(row.date)) {
        snapshot
            .overrides
            .record(row.date, &row.resource_key, row.is_closed);
    }
    for date in legacy_closed.into_iter().filter(|d| range.contains(*d)) {
        snapshot.overrides.close_day(date);
    }
    snapshot.booking_counts = booking_counts
        .into_iter()
        .filter(|row| range.contains(row.date))
        .map(|row| (row.date, row.count))
        .collect();

    Ok(snapshot)
}
