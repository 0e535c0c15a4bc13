pub mod capacity;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tenants/{tenant}/capacity               availability (GET, cached)
/// /tenants/{tenant}/capacity/day           open / close a resource-day (PUT)
/// /tenants/{tenant}/capacity/slots         template slots for one date (GET)
/// /tenants/{tenant}/capacity/overrides     stored overrides in a window (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(capacity::router())
}
