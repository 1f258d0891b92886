//! Robot entity record.

use crate::model::category::CategoryId;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Stable identifier for a `robots` row.
pub type RobotId = i64;

/// One row of the `robots` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub robot_id: RobotId,
    /// Optional grouping; becomes `None` when the category is deleted.
    pub category_id: Option<CategoryId>,
    pub manufacturer: String,
    pub model_name: String,
    /// Free-form kind label, e.g. "quadcopter" or "collaborative arm".
    pub robot_type: String,
    pub year_released: Option<i64>,
    /// Free-text spec sheet as entered by the cataloguer.
    pub specifications: Option<String>,
}

impl Robot {
    /// Maps one `robots` row selected with its schema columns.
    pub fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            robot_id: row.get("robot_id")?,
            category_id: row.get("category_id")?,
            manufacturer: row.get("manufacturer")?,
            model_name: row.get("model_name")?,
            robot_type: row.get("robot_type")?,
            year_released: row.get("year_released")?,
            specifications: row.get("specifications")?,
        })
    }
}
