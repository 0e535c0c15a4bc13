use std::sync::Arc;

use medcap_db::store::CapacityStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: medcap_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Tenant-scoped capacity data access.
    pub store: Arc<dyn CapacityStore>,
}
