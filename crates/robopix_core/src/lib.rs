//! Schema core for the robotics photo catalog.
//!
//! This crate is the single source of truth for the catalog's relational
//! schema: five tables (categories, robots, photos, tags and their
//! association) plus the fixed category seed rows. It applies the schema
//! to SQLite, names the engine's constraint rejections, and audits
//! existing database files against the schema's guarantees. Reading and
//! writing catalog data is deliberately left to external applications.

pub mod db;
pub mod integrity;
pub mod logging;
pub mod model;
pub mod schema;

pub use db::constraint::ConstraintKind;
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use integrity::{ForeignKeyViolation, IntegrityReport, SeedDeviation};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId};
pub use model::photo::{Photo, PhotoId};
pub use model::robot::{Robot, RobotId};
pub use model::tag::{PhotoTag, Tag, TagId};

/// Returns the schema core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
