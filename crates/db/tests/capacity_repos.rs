//! Repository and snapshot tests against a real PostgreSQL database.
//!
//! Requires `DATABASE_URL`; each test gets a fresh migrated database.

use chrono::NaiveDate;
use medcap_core::availability;
use medcap_core::calendar::DateRange;
use medcap_core::resource::ResourceSet;
use medcap_core::types::DbId;
use medcap_db::models::capacity_override::UpsertCapacityOverride;
use medcap_db::repositories::{
    BookingRepo, CapacityDefaultRepo, CapacityOverrideRepo, DayClosureRepo, SlotTemplateRepo,
    TenantRepo,
};
use medcap_db::store::{self, PgCapacityStore};
use sqlx::PgPool;

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn january() -> DateRange {
    DateRange::new(date("2025-01-01"), date("2025-01-31")).unwrap()
}

async fn insert_tenant(pool: &PgPool, slug: &str) -> DbId {
    let (id,): (DbId,) =
        sqlx::query_as("INSERT INTO tenants (slug, name) VALUES ($1, $1) RETURNING id")
            .bind(slug)
            .fetch_one(pool)
            .await
            .unwrap();
    id
}

async fn insert_booking(pool: &PgPool, tenant_id: DbId, day: &str, status: &str) {
    sqlx::query("INSERT INTO bookings (tenant_id, date, status) VALUES ($1, $2, $3)")
        .bind(tenant_id)
        .bind(date(day))
        .bind(status)
        .execute(pool)
        .await
        .unwrap();
}

fn close(day: &str, resource_key: &str, is_closed: bool) -> UpsertCapacityOverride {
    UpsertCapacityOverride {
        date: date(day),
        resource_key: resource_key.to_string(),
        is_closed,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_tenant_by_slug(pool: PgPool) {
    let id = insert_tenant(&pool, "acme").await;

    let tenant = TenantRepo::find_by_slug(&pool, "acme").await.unwrap().unwrap();
    assert_eq!(tenant.id, id);
    assert!(TenantRepo::find_by_slug(&pool, "nope").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_is_idempotent(pool: PgPool) {
    let tenant = insert_tenant(&pool, "acme").await;

    let first = CapacityOverrideRepo::upsert(&pool, tenant, &close("2025-01-15", "col", true))
        .await
        .unwrap();
    let second = CapacityOverrideRepo::upsert(&pool, tenant, &close("2025-01-15", "col", true))
        .await
        .unwrap();
    assert_eq!(first.id, second.id);
    assert!(second.is_closed);

    let reopened = CapacityOverrideRepo::upsert(&pool, tenant, &close("2025-01-15", "col", false))
        .await
        .unwrap();
    assert_eq!(reopened.id, first.id);
    assert!(!reopened.is_closed);

    let rows = CapacityOverrideRepo::list_in_range(&pool, tenant, date("2025-01-01"), date("2025-01-31"))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overrides_are_tenant_scoped_and_ordered(pool: PgPool) {
    let acme = insert_tenant(&pool, "acme").await;
    let globex = insert_tenant(&pool, "globex").await;

    for dto in [
        close("2025-01-16", "basic", true),
        close("2025-01-15", "egd", true),
        close("2025-01-15", "col", true),
        close("2025-02-01", "basic", true),
    ] {
        CapacityOverrideRepo::upsert(&pool, acme, &dto).await.unwrap();
    }
    CapacityOverrideRepo::upsert(&pool, globex, &close("2025-01-15", "basic", true))
        .await
        .unwrap();

    let rows = CapacityOverrideRepo::list_in_range(&pool, acme, date("2025-01-01"), date("2025-01-31"))
        .await
        .unwrap();
    let keys: Vec<_> = rows
        .iter()
        .map(|r| (r.date.to_string(), r.resource_key.as_str()))
        .collect();
    assert_eq!(
        keys,
        [
            ("2025-01-15".to_string(), "col"),
            ("2025-01-15".to_string(), "egd"),
            ("2025-01-16".to_string(), "basic"),
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_legacy_closures_merge_day_closures_and_holidays(pool: PgPool) {
    let tenant = insert_tenant(&pool, "acme").await;
    sqlx::query("INSERT INTO day_closures (tenant_id, date) VALUES ($1, $2)")
        .bind(tenant)
        .bind(date("2025-01-10"))
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO holidays (tenant_id, date, name, is_closed) VALUES \
         ($1, $2, 'New Year', TRUE), ($1, $3, 'Open holiday', FALSE), ($1, $4, 'Dup', TRUE)",
    )
    .bind(tenant)
    .bind(date("2025-01-01"))
    .bind(date("2025-01-20"))
    .bind(date("2025-01-10"))
    .execute(&pool)
    .await
    .unwrap();

    let mut dates =
        DayClosureRepo::closed_dates_in_range(&pool, tenant, date("2025-01-01"), date("2025-01-31"))
            .await
            .unwrap();
    dates.sort();
    assert_eq!(dates, [date("2025-01-01"), date("2025-01-10")]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_counts_only_include_active_statuses(pool: PgPool) {
    let tenant = insert_tenant(&pool, "acme").await;
    for status in ["PENDING", "RESERVED", "CONFIRMED", "CANCELLED", "NO_SHOW"] {
        insert_booking(&pool, tenant, "2025-01-15", status).await;
    }
    insert_booking(&pool, tenant, "2025-02-15", "CONFIRMED").await;

    let counts = BookingRepo::count_active_by_date(&pool, tenant, date("2025-01-01"), date("2025-01-31"))
        .await
        .unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].date, date("2025-01-15"));
    assert_eq!(counts[0].count, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_snapshot_resolves_full_day_cascade(pool: PgPool) {
    let tenant = insert_tenant(&pool, "acme").await;
    // Wednesday 09:00-09:30, 5 per slot.
    sqlx::query(
        "INSERT INTO slot_templates (tenant_id, day_of_week, start_time, end_time, capacity_per_slot) \
         VALUES ($1, 3, '09:00', '09:30', 5)",
    )
    .bind(tenant)
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO capacity_defaults (tenant_id, defaults) VALUES ($1, '{\"BASIC\": 0}')")
        .bind(tenant)
        .execute(&pool)
        .await
        .unwrap();
    for _ in 0..5 {
        insert_booking(&pool, tenant, "2025-01-15", "CONFIRMED").await;
    }

    assert_eq!(SlotTemplateRepo::list_for_tenant(&pool, tenant).await.unwrap().len(), 1);
    let default = CapacityDefaultRepo::find_for_tenant(&pool, tenant)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(default.basic(), Some(0));

    let pg_store = PgCapacityStore::new(pool.clone());
    let snapshot = store::load_snapshot(&pg_store, tenant, january()).await.unwrap();
    let resources = ResourceSet::parse(Some("egd,col")).unwrap();
    let days = availability::resolve_range(&snapshot, january(), &resources);

    let wednesday = &days[&date("2025-01-15")];
    assert!(wednesday.values().all(|state| state.closed));
    assert_eq!(wednesday["basic"].cap, 5);
    assert_eq!(wednesday["basic"].used, 5);

    // Thursday has no template and BASIC = 0: sentinel capacity, open.
    let thursday = &days[&date("2025-01-16")];
    assert_eq!(thursday["basic"].cap, availability::SENTINEL_CAPACITY);
    assert!(!thursday["basic"].closed);
}
