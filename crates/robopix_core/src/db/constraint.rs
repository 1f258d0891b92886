//! Classification of SQLite constraint rejections.
//!
//! # Responsibility
//! - Name which native constraint family rejected a write.
//!
//! # Invariants
//! - Classification reads the error; it never alters or wraps it.
//! - Rejections are per-statement and atomic, so a classified error
//!   implies the offending write left no partial effect.

use rusqlite::ffi;
use std::fmt::{Display, Formatter};

/// The native SQLite constraint that rejected a statement.
///
/// The catalog schema relies on engine-side enforcement only, so every
/// invalid write an external application issues surfaces as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Identifier collision on a primary key (rowid aliases included).
    PrimaryKey,
    /// Reference to a non-existent parent row.
    ForeignKey,
    /// Duplicate value in a `UNIQUE` column, e.g. `tags.tag_name`.
    Unique,
    /// `NULL` written to a required column.
    NotNull,
    /// Any other constraint family SQLite reports.
    Other,
}

impl ConstraintKind {
    /// Classifies `err`, returning `None` for non-constraint failures.
    pub fn classify(err: &rusqlite::Error) -> Option<Self> {
        let code = match err {
            rusqlite::Error::SqliteFailure(code, _) => code,
            _ => return None,
        };
        if code.code != rusqlite::ErrorCode::ConstraintViolation {
            return None;
        }

        Some(match code.extended_code {
            ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_ROWID => Self::PrimaryKey,
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Self::ForeignKey,
            ffi::SQLITE_CONSTRAINT_UNIQUE => Self::Unique,
            ffi::SQLITE_CONSTRAINT_NOTNULL => Self::NotNull,
            _ => Self::Other,
        })
    }

    /// Stable lowercase name for log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrimaryKey => "primary_key",
            Self::ForeignKey => "foreign_key",
            Self::Unique => "unique",
            Self::NotNull => "not_null",
            Self::Other => "other",
        }
    }
}

impl Display for ConstraintKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ConstraintKind;
    use rusqlite::ffi;
    use std::os::raw::c_int;

    fn sqlite_failure(extended_code: c_int) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(extended_code), None)
    }

    #[test]
    fn classify_maps_extended_constraint_codes() {
        assert_eq!(
            ConstraintKind::classify(&sqlite_failure(ffi::SQLITE_CONSTRAINT_PRIMARYKEY)),
            Some(ConstraintKind::PrimaryKey)
        );
        assert_eq!(
            ConstraintKind::classify(&sqlite_failure(ffi::SQLITE_CONSTRAINT_FOREIGNKEY)),
            Some(ConstraintKind::ForeignKey)
        );
        assert_eq!(
            ConstraintKind::classify(&sqlite_failure(ffi::SQLITE_CONSTRAINT_UNIQUE)),
            Some(ConstraintKind::Unique)
        );
        assert_eq!(
            ConstraintKind::classify(&sqlite_failure(ffi::SQLITE_CONSTRAINT_NOTNULL)),
            Some(ConstraintKind::NotNull)
        );
    }

    #[test]
    fn classify_buckets_unknown_constraint_families_as_other() {
        assert_eq!(
            ConstraintKind::classify(&sqlite_failure(ffi::SQLITE_CONSTRAINT_TRIGGER)),
            Some(ConstraintKind::Other)
        );
    }

    #[test]
    fn classify_ignores_non_constraint_failures() {
        assert_eq!(ConstraintKind::classify(&rusqlite::Error::QueryReturnedNoRows), None);
        assert_eq!(ConstraintKind::classify(&sqlite_failure(ffi::SQLITE_BUSY)), None);
    }

    #[test]
    fn as_str_is_stable_for_log_lines() {
        assert_eq!(ConstraintKind::ForeignKey.as_str(), "foreign_key");
        assert_eq!(ConstraintKind::NotNull.to_string(), "not_null");
    }
}
