//! Roadmap repository contract and SQLite implementation.
//!
//! # Invariants
//! - Active items are ordered by `year ASC, order_index ASC, id ASC`.
//! - Unknown persisted `status` text is reported, never defaulted.

use super::{
    bool_to_int, ensure_connection_ready, int_to_bool, timestamp_from_millis, RepoError,
    RepoResult,
};
use crate::model::roadmap::{NewRoadmapItem, RoadmapItem, RoadmapStatus};
use rusqlite::{params, Connection, Row};

const TABLE: &str = "roadmap_items";

const COLUMNS: &[&str] = &[
    "id",
    "title",
    "description",
    "quarter",
    "year",
    "status",
    "order_index",
    "is_active",
    "created_at",
    "updated_at",
];

/// Repository interface for roadmap milestones.
pub trait RoadmapRepository {
    /// Inserts one milestone and returns it with store-assigned fields.
    fn create_item(&self, input: &NewRoadmapItem) -> RepoResult<RoadmapItem>;
    /// Lists active milestones chronologically.
    fn list_active_items(&self) -> RepoResult<Vec<RoadmapItem>>;
}

/// SQLite-backed roadmap repository.
pub struct SqliteRoadmapRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRoadmapRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TABLE, COLUMNS)?;
        Ok(Self { conn })
    }
}

impl RoadmapRepository for SqliteRoadmapRepository<'_> {
    fn create_item(&self, input: &NewRoadmapItem) -> RepoResult<RoadmapItem> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO roadmap_items (
                title,
                description,
                quarter,
                year,
                status,
                order_index,
                is_active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING
                id,
                title,
                description,
                quarter,
                year,
                status,
                order_index,
                is_active,
                created_at,
                updated_at;",
        )?;
        let mut rows = stmt.query(params![
            input.title.as_str(),
            input.description.as_str(),
            input.quarter.as_str(),
            input.year,
            input.status.as_str(),
            input.order_index,
            bool_to_int(input.is_active),
        ])?;

        match rows.next()? {
            Some(row) => parse_item_row(row),
            None => Err(RepoError::InvalidData(format!(
                "insert into {TABLE} returned no row"
            ))),
        }
    }

    fn list_active_items(&self) -> RepoResult<Vec<RoadmapItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                id,
                title,
                description,
                quarter,
                year,
                status,
                order_index,
                is_active,
                created_at,
                updated_at
             FROM roadmap_items
             WHERE is_active = 1
             ORDER BY year ASC, order_index ASC, id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<RoadmapItem> {
    let status_text: String = row.get("status")?;
    let status = RoadmapStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid roadmap status `{status_text}` in {TABLE}.status"))
    })?;

    Ok(RoadmapItem {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        quarter: row.get("quarter")?,
        year: row.get("year")?,
        status,
        order_index: row.get("order_index")?,
        is_active: int_to_bool(TABLE, "is_active", row.get("is_active")?)?,
        created_at: timestamp_from_millis(TABLE, "created_at", row.get("created_at")?)?,
        updated_at: timestamp_from_millis(TABLE, "updated_at", row.get("updated_at")?)?,
    })
}
