//! Read-only integrity audit over a catalog database.
//!
//! # Responsibility
//! - Re-state the schema's referential and uniqueness guarantees as
//!   checks runnable against any database file claiming this schema.
//! - Verify the seeded category rows keep their fixed identities.
//!
//! # Invariants
//! - Every function here is read-only; the audit reports, it never
//!   repairs.
//! - On a connection bootstrapped by `db::open_db` the engine makes the
//!   referential and uniqueness sweeps unviolable; they exist for files
//!   produced or mutated outside this crate.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::DbResult;
use crate::model::category::{Category, CategoryId};
use crate::model::tag::PhotoTag;
use crate::schema;
use log::info;
use rusqlite::Connection;

/// One row reported by `PRAGMA foreign_key_check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyViolation {
    /// Table containing the dangling reference.
    pub table: String,
    /// Rowid of the offending row; `None` for WITHOUT ROWID tables.
    pub rowid: Option<i64>,
    /// Table the reference should have resolved into.
    pub parent_table: String,
    /// Index of the violated foreign-key clause within `table`.
    pub fk_index: i64,
}

/// Deviation of a seeded category row from its fixed identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDeviation {
    pub category_id: CategoryId,
    pub expected_name: &'static str,
    /// Current name, or `None` when the row is missing entirely.
    pub found_name: Option<String>,
}

/// Aggregate result of [`check`]. Empty vectors mean the property holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntegrityReport {
    pub foreign_key_violations: Vec<ForeignKeyViolation>,
    pub duplicate_tag_names: Vec<String>,
    pub duplicate_photo_tag_links: Vec<PhotoTag>,
    pub seed_deviations: Vec<SeedDeviation>,
}

impl IntegrityReport {
    /// Returns whether every audited property holds.
    pub fn is_clean(&self) -> bool {
        self.deviation_count() == 0
    }

    /// Total number of reported deviations across all checks.
    pub fn deviation_count(&self) -> usize {
        self.foreign_key_violations.len()
            + self.duplicate_tag_names.len()
            + self.duplicate_photo_tag_links.len()
            + self.seed_deviations.len()
    }
}

/// Runs every audit and aggregates the findings.
///
/// Verifies schema readiness first, so a database missing catalog tables
/// fails typed (`DbError::MissingTable`) instead of mid-sweep.
///
/// # Side effects
/// - Emits one `integrity_check` logging event with per-sweep counts.
pub fn check(conn: &Connection) -> DbResult<IntegrityReport> {
    schema::ensure_ready(conn)?;

    let report = IntegrityReport {
        foreign_key_violations: foreign_key_violations(conn)?,
        duplicate_tag_names: duplicate_tag_names(conn)?,
        duplicate_photo_tag_links: duplicate_photo_tag_links(conn)?,
        seed_deviations: seed_deviations(conn)?,
    };

    info!(
        "event=integrity_check module=integrity status=ok deviations={} fk={} dup_tags={} dup_links={} seed={}",
        report.deviation_count(),
        report.foreign_key_violations.len(),
        report.duplicate_tag_names.len(),
        report.duplicate_photo_tag_links.len(),
        report.seed_deviations.len()
    );

    Ok(report)
}

/// Lists dangling references via `PRAGMA foreign_key_check`.
pub fn foreign_key_violations(conn: &Connection) -> DbResult<Vec<ForeignKeyViolation>> {
    let mut stmt = conn.prepare("PRAGMA foreign_key_check;")?;
    let mut rows = stmt.query([])?;
    let mut violations = Vec::new();
    while let Some(row) = rows.next()? {
        violations.push(ForeignKeyViolation {
            table: row.get(0)?,
            rowid: row.get(1)?,
            parent_table: row.get(2)?,
            fk_index: row.get(3)?,
        });
    }
    Ok(violations)
}

/// Lists tag names appearing more than once.
///
/// The comparison is byte-wise, matching the `UNIQUE` collation on
/// `tags.tag_name`.
pub fn duplicate_tag_names(conn: &Connection) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT tag_name
         FROM tags
         GROUP BY tag_name
         HAVING COUNT(*) > 1
         ORDER BY tag_name;",
    )?;
    let mut rows = stmt.query([])?;
    let mut names = Vec::new();
    while let Some(row) = rows.next()? {
        names.push(row.get(0)?);
    }
    Ok(names)
}

/// Lists `(photo_id, tag_id)` pairs appearing more than once.
pub fn duplicate_photo_tag_links(conn: &Connection) -> DbResult<Vec<PhotoTag>> {
    let mut stmt = conn.prepare(
        "SELECT photo_id, tag_id
         FROM photo_tags
         GROUP BY photo_id, tag_id
         HAVING COUNT(*) > 1
         ORDER BY photo_id, tag_id;",
    )?;
    let mut rows = stmt.query([])?;
    let mut links = Vec::new();
    while let Some(row) = rows.next()? {
        links.push(PhotoTag::from_row(row)?);
    }
    Ok(links)
}

/// Compares the seeded category rows against their fixed identities.
///
/// Categories added beyond the seeded ids are not deviations; the
/// exactly-three property holds only for freshly initialized databases.
pub fn seed_deviations(conn: &Connection) -> DbResult<Vec<SeedDeviation>> {
    let mut deviations = Vec::new();
    for &(category_id, expected_name) in schema::SEED_CATEGORIES {
        match category_by_id(conn, category_id)? {
            Some(category) if category.category_name == expected_name => {}
            Some(category) => deviations.push(SeedDeviation {
                category_id,
                expected_name,
                found_name: Some(category.category_name),
            }),
            None => deviations.push(SeedDeviation {
                category_id,
                expected_name,
                found_name: None,
            }),
        }
    }
    Ok(deviations)
}

fn category_by_id(conn: &Connection, category_id: CategoryId) -> DbResult<Option<Category>> {
    let mut stmt = conn.prepare(
        "SELECT category_id, category_name, description
         FROM robot_categories
         WHERE category_id = ?1;",
    )?;
    let mut rows = stmt.query([category_id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(Category::from_row(row)?));
    }
    Ok(None)
}
