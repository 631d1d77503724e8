//! Entity model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-field overwrites, where the
//!   entity supports editing

pub mod project;
pub mod sprint;
pub mod task;
