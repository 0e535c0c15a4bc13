//! Capacity API server library.
//!
//! Exposes the building blocks (config, state, error handling, cache layer,
//! routes) so integration tests and the binary entrypoint can both reach
//! them.

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
