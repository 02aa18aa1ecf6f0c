//! Branding repository contract and SQLite implementation.
//!
//! # Invariants
//! - The authoritative row is the one with the lowest `id`.
//! - Updates touch only patched columns plus `updated_at`, in one statement.
//! - `updated_at` strictly increases on every update.

use super::{ensure_connection_ready, timestamp_from_millis, RepoError, RepoResult, NOW_MS_SQL};
use crate::model::branding::{
    BrandingConfig, BrandingConfigPatch, BrandingValue, NewBrandingConfig,
};
use crate::model::RecordId;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const TABLE: &str = "branding_config";

const COLUMNS: &[&str] = &[
    "id",
    "primary_color",
    "secondary_color",
    "accent_color",
    "font_family",
    "logo_url",
    "favicon_url",
    "coin_name",
    "coin_symbol",
    "created_at",
    "updated_at",
];

const RETURNING_SQL: &str = "RETURNING
    id,
    primary_color,
    secondary_color,
    accent_color,
    font_family,
    logo_url,
    favicon_url,
    coin_name,
    coin_symbol,
    created_at,
    updated_at";

/// Repository interface for the branding singleton.
pub trait BrandingRepository {
    /// Inserts one branding row and returns it with store-assigned fields.
    fn create_branding(&self, input: &NewBrandingConfig) -> RepoResult<BrandingConfig>;
    /// Loads the authoritative (lowest id) branding row, if any.
    fn first_branding(&self) -> RepoResult<Option<BrandingConfig>>;
    /// Applies a partial update to the row with `id` and returns the result.
    fn update_branding(
        &self,
        id: RecordId,
        patch: &BrandingConfigPatch,
    ) -> RepoResult<BrandingConfig>;
}

/// SQLite-backed branding repository.
pub struct SqliteBrandingRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBrandingRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TABLE, COLUMNS)?;
        Ok(Self { conn })
    }
}

impl BrandingRepository for SqliteBrandingRepository<'_> {
    fn create_branding(&self, input: &NewBrandingConfig) -> RepoResult<BrandingConfig> {
        let mut stmt = self.conn.prepare(&format!(
            "INSERT INTO branding_config (
                primary_color,
                secondary_color,
                accent_color,
                font_family,
                logo_url,
                favicon_url,
                coin_name,
                coin_symbol
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            {RETURNING_SQL};"
        ))?;
        let mut rows = stmt.query(params![
            input.primary_color.as_str(),
            input.secondary_color.as_str(),
            input.accent_color.as_str(),
            input.font_family.as_str(),
            input.logo_url.as_deref(),
            input.favicon_url.as_deref(),
            input.coin_name.as_str(),
            input.coin_symbol.as_str(),
        ])?;

        match rows.next()? {
            Some(row) => parse_branding_row(row),
            None => Err(RepoError::InvalidData(
                "insert into branding_config returned no row".to_string(),
            )),
        }
    }

    fn first_branding(&self) -> RepoResult<Option<BrandingConfig>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                id,
                primary_color,
                secondary_color,
                accent_color,
                font_family,
                logo_url,
                favicon_url,
                coin_name,
                coin_symbol,
                created_at,
                updated_at
             FROM branding_config
             ORDER BY id ASC
             LIMIT 1;",
        )?;
        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_branding_row(row)?)),
            None => Ok(None),
        }
    }

    fn update_branding(
        &self,
        id: RecordId,
        patch: &BrandingConfigPatch,
    ) -> RepoResult<BrandingConfig> {
        let mut set_clauses = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        for (column, value) in patch.assignments() {
            bind_values.push(match value {
                BrandingValue::Text(text) => Value::Text(text.to_string()),
                BrandingValue::Null => Value::Null,
            });
            set_clauses.push(format!("{column} = ?{}", bind_values.len()));
        }
        set_clauses.push(format!("updated_at = MAX({NOW_MS_SQL}, updated_at + 1)"));
        bind_values.push(Value::Integer(id));

        let sql = format!(
            "UPDATE branding_config
             SET {}
             WHERE id = ?{}
             {RETURNING_SQL};",
            set_clauses.join(", "),
            bind_values.len()
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        match rows.next()? {
            Some(row) => parse_branding_row(row),
            None => Err(RepoError::NotFound(TABLE)),
        }
    }
}

fn parse_branding_row(row: &Row<'_>) -> RepoResult<BrandingConfig> {
    Ok(BrandingConfig {
        id: row.get("id")?,
        primary_color: row.get("primary_color")?,
        secondary_color: row.get("secondary_color")?,
        accent_color: row.get("accent_color")?,
        font_family: row.get("font_family")?,
        logo_url: row.get("logo_url")?,
        favicon_url: row.get("favicon_url")?,
        coin_name: row.get("coin_name")?,
        coin_symbol: row.get("coin_symbol")?,
        created_at: timestamp_from_millis(TABLE, "created_at", row.get("created_at")?)?,
        updated_at: timestamp_from_millis(TABLE, "updated_at", row.get("updated_at")?)?,
    })
}
