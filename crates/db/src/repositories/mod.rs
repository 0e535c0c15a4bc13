//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Every tenant-owned query
//! takes the tenant ID explicitly.

pub mod booking_repo;
pub mod capacity_default_repo;
pub mod capacity_override_repo;
pub mod day_closure_repo;
pub mod slot_template_repo;
pub mod tenant_repo;

pub use booking_repo::BookingRepo;
pub use capacity_default_repo::CapacityDefaultRepo;
pub use capacity_override_repo::CapacityOverrideRepo;
pub use day_closure_repo::DayClosureRepo;
pub use slot_template_repo::SlotTemplateRepo;
pub use tenant_repo::TenantRepo;
