//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row and, where the engine writes, a `Deserialize` DTO.

pub mod booking;
pub mod capacity_default;
pub mod capacity_override;
pub mod slot_template;
pub mod tenant;
