//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A lenient `Deserialize` + `Validate` create payload for the HTTP layer
//! - The typed `New*` record the payload validates into

pub mod censor;
pub mod hold;
pub mod organisation;
pub mod sprogcenter;
