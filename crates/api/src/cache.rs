//! Response cache layer for capacity reads.
//!
//! A payload is serialized once into canonical JSON (every map in the
//! resolver output is a `BTreeMap`, so key order is stable), hashed into a
//! weak ETag, and compared against the request's `If-None-Match`. A match
//! yields `304 Not Modified` with an empty body; otherwise the full body is
//! returned with the ETag and the configured `Cache-Control` policy.

use axum::body::Body;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use medcap_core::hashing;
use serde::Serialize;

use crate::config::CacheConfig;
use crate::error::{AppError, AppResult};

/// A serialized, hashed JSON payload ready for a conditional response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedJson {
    body: Vec<u8>,
    etag: String,
}

impl CachedJson {
    /// Serialize `payload` and compute its weak ETag.
    pub fn new<T: Serialize>(payload: &T) -> AppResult<Self> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| AppError::InternalError(format!("Failed to serialize response: {e}")))?;
        let etag = hashing::weak_etag(&body);
        Ok(Self { body, etag })
    }

    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Returns `true` if the request's `If-None-Match` matches this payload.
    pub fn is_fresh(&self, request_headers: &HeaderMap) -> bool {
        request_headers
            .get_all(IF_NONE_MATCH)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .any(|value| hashing::if_none_match(value, &self.etag))
    }

    /// Build the conditional response for a request.
    pub fn respond(self, request_headers: &HeaderMap, cache: &CacheConfig) -> AppResult<Response> {
        let etag = HeaderValue::from_str(&self.etag)
            .map_err(|e| AppError::InternalError(format!("Invalid ETag header: {e}")))?;
        let cache_control = HeaderValue::from_str(&cache.header_value())
            .map_err(|e| AppError::InternalError(format!("Invalid Cache-Control header: {e}")))?;

        if self.is_fresh(request_headers) {
            let mut response = StatusCode::NOT_MODIFIED.into_response();
            let headers = response.headers_mut();
            headers.insert(ETAG, etag);
            headers.insert(CACHE_CONTROL, cache_control);
            return Ok(response);
        }

        let mut response = Response::new(Body::from(self.body));
        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ETAG, etag);
        headers.insert(CACHE_CONTROL, cache_control);
        Ok(response)
    }
}
