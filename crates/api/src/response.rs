//! Shared response envelope types for API handlers.
//!
//! Admin and diagnostic endpoints use a `{ "data": ... }` envelope. The
//! public capacity reads keep their historical shapes and are serialized by
//! [`crate::cache`] instead.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: overrides }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
