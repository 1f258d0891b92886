//! Typed records for the five catalog entities.
//!
//! # Responsibility
//! - Mirror each schema table as a plain Rust record.
//! - Map `rusqlite` rows into records without interpretation.
//!
//! # Invariants
//! - Records are row images: field names and nullability follow the
//!   schema columns exactly.
//! - Records carry no persistence logic; reads and writes of user data
//!   belong to external applications.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod category;
pub mod photo;
pub mod robot;
pub mod tag;
