//! Photo entity record.

use crate::model::robot::RobotId;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Stable identifier for a `photos` row.
pub type PhotoId = i64;

/// One row of the `photos` table.
///
/// `file_name` and `file_path` are the only required descriptive fields;
/// everything else is metadata filled in as available at upload time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub photo_id: PhotoId,
    /// Optional subject; becomes `None` when the robot is deleted.
    pub robot_id: Option<RobotId>,
    pub file_name: String,
    pub file_path: String,
    /// ISO-8601 date; the engine defaults it to the day of insertion.
    pub upload_date: Option<String>,
    /// Shot kind, e.g. "front view", "side view", "in operation";
    /// the engine defaults it to "general".
    pub photo_type: Option<String>,
    pub resolution: Option<String>,
    pub file_size_kb: Option<i64>,
    /// Free-text tag snapshot kept for display. The `photo_tags`
    /// association is the authoritative link set.
    pub tags: Option<String>,
    pub description: Option<String>,
    pub photographer: Option<String>,
}

impl Photo {
    /// Maps one `photos` row selected with its schema columns.
    pub fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            photo_id: row.get("photo_id")?,
            robot_id: row.get("robot_id")?,
            file_name: row.get("file_name")?,
            file_path: row.get("file_path")?,
            upload_date: row.get("upload_date")?,
            photo_type: row.get("photo_type")?,
            resolution: row.get("resolution")?,
            file_size_kb: row.get("file_size_kb")?,
            tags: row.get("tags")?,
            description: row.get("description")?,
            photographer: row.get("photographer")?,
        })
    }
}
