//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the entity is mutable, a `Deserialize` update DTO (all `Option`
//!   fields) for patches

pub mod project;
pub mod project_output;
pub mod project_version;
