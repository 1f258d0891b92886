//! Category lookup record.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Stable identifier for a `robot_categories` row.
pub type CategoryId = i64;

/// One row of the `robot_categories` lookup table.
///
/// The three seeded rows (ids 1..3) are fixed by the schema; external
/// applications may append further categories but must not reuse the
/// seeded identifiers for anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    /// Display name, declared as at most 50 characters.
    pub category_name: String,
    pub description: Option<String>,
}

impl Category {
    /// Maps one `robot_categories` row selected with its schema columns.
    pub fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            category_id: row.get("category_id")?,
            category_name: row.get("category_name")?,
            description: row.get("description")?,
        })
    }
}
