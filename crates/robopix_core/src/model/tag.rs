//! Tag record and the photo/tag association record.

use crate::model::photo::PhotoId;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Stable identifier for a `tags` row.
pub type TagId = i64;

/// One row of the `tags` table. Names are unique across the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub tag_id: TagId,
    pub tag_name: String,
}

impl Tag {
    /// Maps one `tags` row selected with its schema columns.
    pub fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            tag_id: row.get("tag_id")?,
            tag_name: row.get("tag_name")?,
        })
    }
}

/// One row of the `photo_tags` association table.
///
/// The pair is the composite primary key: a photo carries a given tag at
/// most once, and both sides must exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoTag {
    pub photo_id: PhotoId,
    pub tag_id: TagId,
}

impl PhotoTag {
    /// Maps one `photo_tags` row selected with its schema columns.
    pub fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            photo_id: row.get("photo_id")?,
            tag_id: row.get("tag_id")?,
        })
    }
}
