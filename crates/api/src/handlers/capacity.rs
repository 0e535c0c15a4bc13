//! Handlers for the capacity & availability endpoints.
//!
//! Public reads (`GET /capacity`) go through the cache layer and support
//! conditional requests. The admin write (`PUT /capacity/day`) and the
//! admin listings are never cached.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use medcap_core::availability::{self, DayResources};
use medcap_core::calendar::{self, DateRange, Month};
use medcap_core::error::CoreError;
use medcap_core::resource::{self, ResourceSet};
use medcap_core::template;
use medcap_db::models::capacity_override::UpsertCapacityOverride;
use medcap_db::models::slot_template::SlotTemplate;
use medcap_db::models::tenant::Tenant;
use medcap_db::store;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::cache::CachedJson;
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query params
// ---------------------------------------------------------------------------

/// Query parameters for `GET /capacity`.
///
/// Either `month` (coarse view) or `from` + `to` (detailed view). Every
/// field is a raw string so malformed values surface with their own codes.
#[derive(Debug, Default, Deserialize)]
pub struct CapacityParams {
    pub month: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub resources: Option<String>,
}

/// Query parameters for `GET /capacity/overrides`.
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Query parameters for `GET /capacity/slots`.
#[derive(Debug, Deserialize)]
pub struct SlotParams {
    pub date: Option<String>,
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for `PUT /capacity/day`.
#[derive(Debug, Deserialize, Validate)]
pub struct SetDayRequest {
    pub date: String,
    /// Resource key; absent or empty means `basic`. `special` is stored as `col`.
    #[serde(default)]
    #[validate(length(max = 64, message = "resource must be at most 64 characters"))]
    pub resource: Option<String>,
    pub close: bool,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Detailed range view: `{ "ok": true, "days": { date: { resource: state } } }`.
#[derive(Debug, Serialize)]
pub struct DetailedCapacity {
    pub ok: bool,
    pub days: BTreeMap<NaiveDate, DayResources>,
}

/// Expanded template for a single date.
#[derive(Debug, Serialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub schedule: template::DaySchedule,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the tenant slug from the path, or fail with `TENANT_NOT_FOUND`.
async fn resolve_tenant(state: &AppState, slug: &str) -> AppResult<Tenant> {
    let tenant = state
        .store
        .find_tenant(slug)
        .await?
        .ok_or_else(|| CoreError::TenantNotFound(slug.to_string()))?;
    Ok(tenant)
}

// ---------------------------------------------------------------------------
// Public reads
// ---------------------------------------------------------------------------

/// GET /api/v1/tenants/{tenant}/capacity
///
/// `?month=YYYY-MM` returns `{ date: "OPEN" | "CLOSED" }` for every day of
/// the month (basic resource only). `?from=&to=&resources=` returns the
/// detailed per-resource view. `month` wins when both are present.
pub async fn get_capacity(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppQuery(params): AppQuery<CapacityParams>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let cached = if let Some(raw_month) = params.month.as_deref() {
        let month = Month::parse(raw_month)?;
        let tenant = resolve_tenant(&state, &slug).await?;
        let snapshot = store::load_snapshot(state.store.as_ref(), tenant.id, month.range()).await?;
        let days = availability::resolve_month(&snapshot, month);

        tracing::debug!(tenant = %tenant.slug, month = %raw_month, "Resolved month capacity");
        CachedJson::new(&days)?
    } else {
        let range = DateRange::parse(params.from.as_deref(), params.to.as_deref())?;
        let resources = ResourceSet::parse(params.resources.as_deref())?;
        let tenant = resolve_tenant(&state, &slug).await?;
        let snapshot = store::load_snapshot(state.store.as_ref(), tenant.id, range).await?;
        let days = availability::resolve_range(&snapshot, range, &resources);

        tracing::debug!(
            tenant = %tenant.slug,
            from = %range.from,
            to = %range.to,
            resources = ?resources.iter().collect::<Vec<_>>(),
            "Resolved detailed capacity"
        );
        CachedJson::new(&DetailedCapacity { ok: true, days })?
    };

    cached.respond(&headers, &state.config.cache)
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// PUT /api/v1/tenants/{tenant}/capacity/day
///
/// Open or close one resource on one date. Idempotent: repeating the call
/// leaves the same stored override. Cached reads pick up the change on
/// their next revalidation.
pub async fn set_day(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppJson(body): AppJson<SetDayRequest>,
) -> AppResult<impl IntoResponse> {
    body.validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let date = calendar::require_date(&body.date)?;
    let resource_key = resource::validate_key(body.resource.as_deref().unwrap_or_default())?;
    let tenant = resolve_tenant(&state, &slug).await?;

    let input = UpsertCapacityOverride {
        date,
        resource_key,
        is_closed: body.close,
    };
    let stored = state.store.upsert_override(tenant.id, &input).await?;

    tracing::info!(
        tenant = %tenant.slug,
        date = %stored.date,
        resource_key = %stored.resource_key,
        is_closed = stored.is_closed,
        "Capacity override saved"
    );

    Ok(Json(DataResponse { data: stored }))
}

/// GET /api/v1/tenants/{tenant}/capacity/overrides?from=&to=
///
/// List stored overrides in the window, ordered by date then resource key.
pub async fn list_overrides(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppQuery(params): AppQuery<RangeParams>,
) -> AppResult<impl IntoResponse> {
    let range = DateRange::parse(params.from.as_deref(), params.to.as_deref())?;
    let tenant = resolve_tenant(&state, &slug).await?;
    let overrides = state.store.overrides_in_range(tenant.id, range).await?;

    Ok(Json(DataResponse { data: overrides }))
}

/// GET /api/v1/tenants/{tenant}/capacity/slots?date=YYYY-MM-DD
///
/// The 30-minute slot list and aggregate template capacity for the
/// weekday of `date`.
pub async fn get_day_slots(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppQuery(params): AppQuery<SlotParams>,
) -> AppResult<impl IntoResponse> {
    let date = calendar::require_date(params.date.as_deref().unwrap_or_default())?;
    let tenant = resolve_tenant(&state, &slug).await?;
    let templates = state.store.slot_templates(tenant.id).await?;

    let rules: Vec<_> = templates.iter().map(SlotTemplate::to_rule).collect();
    let schedule = template::expand_day(&rules, calendar::day_of_week(date));

    Ok(Json(DataResponse {
        data: DaySlots { date, schedule },
    }))
}
