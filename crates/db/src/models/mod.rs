//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create/upsert DTO for inserts
//! - Narrow `FromRow` projections for queries that read a few columns

pub mod account;
pub mod company_profile;
pub mod person_profile;
pub mod quiz_score;
pub mod schedule;
pub mod waste_image;
