//! Route definitions for tenant capacity.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::capacity;
use crate::state::AppState;

/// Capacity routes, mounted under `/api/v1`.
///
/// ```text
/// GET /tenants/{tenant}/capacity            -> get_capacity
/// PUT /tenants/{tenant}/capacity/day        -> set_day
/// GET /tenants/{tenant}/capacity/slots      -> get_day_slots
/// GET /tenants/{tenant}/capacity/overrides  -> list_overrides
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tenants/{tenant}/capacity", get(capacity::get_capacity))
        .route("/tenants/{tenant}/capacity/day", put(capacity::set_day))
        .route("/tenants/{tenant}/capacity/slots", get(capacity::get_day_slots))
        .route(
            "/tenants/{tenant}/capacity/overrides",
            get(capacity::list_overrides),
        )
}
