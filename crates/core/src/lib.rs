//! Domain logic for the capacity & availability engine.
//!
//! This crate has no internal dependencies and performs no I/O. The `db`
//! crate loads rows and hands them to the pure functions here; the `api`
//! crate maps the results onto HTTP.

pub mod availability;
pub mod booking;
pub mod calendar;
pub mod error;
pub mod hashing;
pub mod resource;
pub mod template;
pub mod types;
