//! Content section repository contract and SQLite implementation.

use super::{
    bool_to_int, ensure_connection_ready, int_to_bool, timestamp_from_millis, RepoError,
    RepoResult,
};
use crate::model::content::{ContentSection, NewContentSection};
use rusqlite::{params, Connection, Row};

const TABLE: &str = "landing_page_content";

const COLUMNS: &[&str] = &[
    "id",
    "section_name",
    "title",
    "content",
    "order_index",
    "is_active",
    "created_at",
    "updated_at",
];

/// Repository interface for content sections.
pub trait ContentRepository {
    /// Inserts one section and returns it with store-assigned fields.
    fn create_section(&self, input: &NewContentSection) -> RepoResult<ContentSection>;
    /// Lists active sections by `order_index ASC, id ASC`.
    fn list_active_sections(&self) -> RepoResult<Vec<ContentSection>>;
}

/// SQLite-backed content section repository.
pub struct SqliteContentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContentRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TABLE, COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ContentRepository for SqliteContentRepository<'_> {
    fn create_section(&self, input: &NewContentSection) -> RepoResult<ContentSection> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO landing_page_content (
                section_name,
                title,
                content,
                order_index,
                is_active
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING
                id,
                section_name,
                title,
                content,
                order_index,
                is_active,
                created_at,
                updated_at;",
        )?;
        let mut rows = stmt.query(params![
            input.section_name.as_str(),
            input.title.as_str(),
            input.content.as_str(),
            input.order_index,
            bool_to_int(input.is_active),
        ])?;

        match rows.next()? {
            Some(row) => parse_section_row(row),
            None => Err(RepoError::InvalidData(format!(
                "insert into {TABLE} returned no row"
            ))),
        }
    }

    fn list_active_sections(&self) -> RepoResult<Vec<ContentSection>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                id,
                section_name,
                title,
                content,
                order_index,
                is_active,
                created_at,
                updated_at
             FROM landing_page_content
             WHERE is_active = 1
             ORDER BY order_index ASC, id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut sections = Vec::new();
        while let Some(row) = rows.next()? {
            sections.push(parse_section_row(row)?);
        }
        Ok(sections)
    }
}

fn parse_section_row(row: &Row<'_>) -> RepoResult<ContentSection> {
    Ok(ContentSection {
        id: row.get("id")?,
        section_name: row.get("section_name")?,
        title: row.get("title")?,
        content: row.get("content")?,
        order_index: row.get("order_index")?,
        is_active: int_to_bool(TABLE, "is_active", row.get("is_active")?)?,
        created_at: timestamp_from_millis(TABLE, "created_at", row.get("created_at")?)?,
        updated_at: timestamp_from_millis(TABLE, "updated_at", row.get("updated_at")?)?,
    })
}
