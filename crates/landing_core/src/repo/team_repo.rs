//! Team member repository contract and SQLite implementation.

use super::{
    bool_to_int, ensure_connection_ready, int_to_bool, timestamp_from_millis, RepoError,
    RepoResult,
};
use crate::model::team::{NewTeamMember, TeamMember};
use rusqlite::{params, Connection, Row};

const TABLE: &str = "team_members";

const COLUMNS: &[&str] = &[
    "id",
    "name",
    "position",
    "bio",
    "image_url",
    "linkedin_url",
    "twitter_url",
    "order_index",
    "is_active",
    "created_at",
    "updated_at",
];

/// Repository interface for the team roster.
pub trait TeamRepository {
    /// Inserts one member and returns it with store-assigned fields.
    fn create_member(&self, input: &NewTeamMember) -> RepoResult<TeamMember>;
    /// Lists active members by `order_index ASC, id ASC`.
    fn list_active_members(&self) -> RepoResult<Vec<TeamMember>>;
}

/// SQLite-backed team member repository.
pub struct SqliteTeamRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTeamRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TABLE, COLUMNS)?;
        Ok(Self { conn })
    }
}

impl TeamRepository for SqliteTeamRepository<'_> {
    fn create_member(&self, input: &NewTeamMember) -> RepoResult<TeamMember> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO team_members (
                name,
                position,
                bio,
                image_url,
                linkedin_url,
                twitter_url,
                order_index,
                is_active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING
                id,
                name,
                position,
                bio,
                image_url,
                linkedin_url,
                twitter_url,
                order_index,
                is_active,
                created_at,
                updated_at;",
        )?;
        let mut rows = stmt.query(params![
            input.name.as_str(),
            input.position.as_str(),
            input.bio.as_str(),
            input.image_url.as_deref(),
            input.linkedin_url.as_deref(),
            input.twitter_url.as_deref(),
            input.order_index,
            bool_to_int(input.is_active),
        ])?;

        match rows.next()? {
            Some(row) => parse_member_row(row),
            None => Err(RepoError::InvalidData(format!(
                "insert into {TABLE} returned no row"
            ))),
        }
    }

    fn list_active_members(&self) -> RepoResult<Vec<TeamMember>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                id,
                name,
                position,
                bio,
                image_url,
                linkedin_url,
                twitter_url,
                order_index,
                is_active,
                created_at,
                updated_at
             FROM team_members
             WHERE is_active = 1
             ORDER BY order_index ASC, id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut members = Vec::new();
        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }
        Ok(members)
    }
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<TeamMember> {
    Ok(TeamMember {
        id: row.get("id")?,
        name: row.get("name")?,
        position: row.get("position")?,
        bio: row.get("bio")?,
        image_url: row.get("image_url")?,
        linkedin_url: row.get("linkedin_url")?,
        twitter_url: row.get("twitter_url")?,
        order_index: row.get("order_index")?,
        is_active: int_to_bool(TABLE, "is_active", row.get("is_active")?)?,
        created_at: timestamp_from_millis(TABLE, "created_at", row.get("created_at")?)?,
        updated_at: timestamp_from_millis(TABLE, "updated_at", row.get("updated_at")?)?,
    })
}
