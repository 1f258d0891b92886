//! SQLite bootstrap and error surface for the catalog schema.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the photo catalog.
//! - Apply the schema and verify readiness before handing a connection out.
//!
//! # Invariants
//! - Connections returned by this module enforce foreign keys.
//! - Callers never see a connection whose schema application failed.
//!
//! # See also
//! - docs/architecture/data-model.md

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod constraint;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening, initializing, or inspecting a catalog database.
#[derive(Debug)]
pub enum DbError {
    /// Transport or statement failure reported by SQLite.
    Sqlite(rusqlite::Error),
    /// A declared catalog table is absent from the database.
    MissingTable(&'static str),
    /// A catalog table lacks one of its declared columns.
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MissingTable(table) => {
                write!(f, "database is missing catalog table `{table}`")
            }
            Self::MissingColumn { table, column } => {
                write!(f, "catalog table `{table}` is missing column `{column}`")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MissingTable(_) => None,
            Self::MissingColumn { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
