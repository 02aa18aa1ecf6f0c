//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define one data access contract per entity kind.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Repositories are constructed only over migrated connections.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Every list is ordered by its display key with `id ASC` as tie-break.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::Timestamp;
use chrono::DateTime;
use rusqlite::Connection;
use thiserror::Error;

pub mod branding_repo;
pub mod content_repo;
pub mod roadmap_repo;
pub mod team_repo;

/// Current instant as epoch milliseconds, evaluated inside SQLite.
pub(crate) const NOW_MS_SQL: &str =
    "CAST(ROUND((julianday('now') - 2440587.5) * 86400000.0) AS INTEGER)";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error shared by all entity repositories.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Db(#[from] DbError),
    /// Targeted row does not exist. Carries the table name.
    #[error("no row found in `{0}`")]
    NotFound(&'static str),
    #[error("invalid persisted data: {0}")]
    InvalidData(String),
    #[error("repository requires schema version {expected_version}, got {actual_version}")]
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    #[error("repository requires table `{0}`")]
    MissingRequiredTable(&'static str),
    #[error("repository requires column `{column}` in table `{table}`")]
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for &column in columns {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
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

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

pub(crate) fn timestamp_from_millis(
    table: &str,
    column: &str,
    millis: i64,
) -> RepoResult<Timestamp> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid timestamp `{millis}` in {table}.{column}"))
    })
}

pub(crate) fn int_to_bool(table: &str, column: &str, value: i64) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean `{other}` in {table}.{column}"
        ))),
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{bool_to_int, int_to_bool, timestamp_from_millis, RepoError};

    #[test]
    fn booleans_roundtrip_through_integers() {
        assert!(int_to_bool("t", "c", bool_to_int(true)).unwrap());
        assert!(!int_to_bool("t", "c", bool_to_int(false)).unwrap());
        assert!(matches!(
            int_to_bool("t", "c", 2),
            Err(RepoError::InvalidData(_))
        ));
    }

    #[test]
    fn timestamps_keep_millisecond_precision() {
        let ts = timestamp_from_millis("t", "c", 1_700_000_000_123).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_700_000_000_123);
        assert!(matches!(
            timestamp_from_millis("t", "c", i64::MAX),
            Err(RepoError::InvalidData(_))
        ));
    }
}
