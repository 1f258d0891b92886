//! Catalog schema definition and application.
//!
//! # Responsibility
//! - Own the DDL and seed SQL for the robotics photo catalog.
//! - Apply both idempotently to a connection inside one transaction.
//! - Verify that a connection exposes every required table and column.
//!
//! # Invariants
//! - `apply` is idempotent: re-running it against an initialized database
//!   changes nothing.
//! - Seed rows are lookup data owned by the schema and are re-asserted on
//!   every `apply`.
//! - Referential enforcement stays inside SQLite; this module declares
//!   constraints, it never re-checks them.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Table definitions for the five catalog entities.
pub const SCHEMA_SQL: &str = include_str!("catalog.sql");

/// Fixed rows for the `robot_categories` lookup table.
pub const SEED_SQL: &str = include_str!("seed_categories.sql");

/// `(category_id, category_name)` pairs guaranteed present after `apply`.
pub const SEED_CATEGORIES: &[(i64, &str)] = &[
    (1, "Drones"),
    (2, "AMRs"),
    (3, "Robotic Arms"),
];

/// Every declared table with the columns callers may rely on.
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    (
        "robot_categories",
        &["category_id", "category_name", "description"],
    ),
    (
        "robots",
        &[
            "robot_id",
            "category_id",
            "manufacturer",
            "model_name",
            "robot_type",
            "year_released",
            "specifications",
        ],
    ),
    (
        "photos",
        &[
            "photo_id",
            "robot_id",
            "file_name",
            "file_path",
            "upload_date",
            "photo_type",
            "resolution",
            "file_size_kb",
            "tags",
            "description",
            "photographer",
        ],
    ),
    ("tags", &["tag_id", "tag_name"]),
    ("photo_tags", &["photo_id", "tag_id"]),
];

/// Names of all catalog tables, in creation order.
pub fn table_names() -> impl Iterator<Item = &'static str> {
    REQUIRED_COLUMNS.iter().map(|&(table, _)| table)
}

/// Applies the catalog DDL and seed rows in one transaction.
///
/// Safe to call on every open: tables use `IF NOT EXISTS` and the seed
/// uses `INSERT OR IGNORE`, so an initialized database is left unchanged
/// apart from restoring deleted seed rows.
pub fn apply(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.execute_batch(SEED_SQL)?;
    tx.commit()?;
    Ok(())
}

/// Verifies that every required table and column is present.
///
/// # Errors
/// - `DbError::MissingTable` when a declared table is absent.
/// - `DbError::MissingColumn` when a table lacks a declared column.
pub fn ensure_ready(conn: &Connection) -> DbResult<()> {
    for &(table, columns) in REQUIRED_COLUMNS {
        if !table_exists(conn, table)? {
            return Err(DbError::MissingTable(table));
        }
        for &column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(DbError::MissingColumn { table, column });
            }
        }
    }
    Ok(())
}

/// Returns whether `table` exists in the connected database.
pub fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Returns whether `table` declares `column`.
pub fn table_has_column(conn: &Connection, table: &str, column: &str) -> DbResult<bool> {
    // PRAGMA arguments cannot be bound, so the table name is interpolated.
    // Callers only pass names from REQUIRED_COLUMNS or test fixtures.
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
