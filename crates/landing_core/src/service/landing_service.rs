//! Landing page use-case service.
//!
//! # Responsibility
//! - Assemble the page aggregate from the four entity repositories.
//! - Provide branding read/update and record creation entry points.
//!
//! # Invariants
//! - `get_landing_page_data` never persists its fallback branding.
//! - `get_branding_config` and `update_branding_config` fail with
//!   `BrandingNotFound` when no branding row exists.
//! - Creation inputs are validated before any store access.
//! - Store failures are logged and returned unchanged; nothing is retried.

use crate::model::branding::{BrandingConfig, BrandingConfigPatch, NewBrandingConfig};
use crate::model::content::{ContentSection, NewContentSection};
use crate::model::landing::LandingPageData;
use crate::model::roadmap::{NewRoadmapItem, RoadmapItem};
use crate::model::team::{NewTeamMember, TeamMember};
use crate::model::ValidationError;
use crate::repo::branding_repo::{BrandingRepository, SqliteBrandingRepository};
use crate::repo::content_repo::{ContentRepository, SqliteContentRepository};
use crate::repo::roadmap_repo::{RoadmapRepository, SqliteRoadmapRepository};
use crate::repo::team_repo::{SqliteTeamRepository, TeamRepository};
use crate::repo::{RepoError, RepoResult};
use chrono::Utc;
use log::{error, info};
use rusqlite::Connection;
use thiserror::Error;

/// Service error for landing page use-cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no branding configuration found")]
    BrandingNotFound,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Landing page service over SQLite repositories sharing one connection.
pub type SqliteLandingPageService<'conn> = LandingPageService<
    SqliteBrandingRepository<'conn>,
    SqliteContentRepository<'conn>,
    SqliteTeamRepository<'conn>,
    SqliteRoadmapRepository<'conn>,
>;

/// Use-case facade over one repository per entity kind.
pub struct LandingPageService<B, C, T, R> {
    branding: B,
    content: C,
    team: T,
    roadmap: R,
}

impl<'conn> SqliteLandingPageService<'conn> {
    /// Builds all four SQLite repositories over a migrated connection.
    pub fn try_from_connection(conn: &'conn Connection) -> RepoResult<Self> {
        Ok(Self::new(
            SqliteBrandingRepository::try_new(conn)?,
            SqliteContentRepository::try_new(conn)?,
            SqliteTeamRepository::try_new(conn)?,
            SqliteRoadmapRepository::try_new(conn)?,
        ))
    }
}

impl<B, C, T, R> LandingPageService<B, C, T, R>
where
    B: BrandingRepository,
    C: ContentRepository,
    T: TeamRepository,
    R: RoadmapRepository,
{
    /// Creates a service using the provided repository implementations.
    pub fn new(branding: B, content: C, team: T, roadmap: R) -> Self {
        Self {
            branding,
            content,
            team,
            roadmap,
        }
    }

    /// Returns branding plus every active content section, team member and
    /// roadmap item in display order.
    ///
    /// # Contract
    /// - Missing branding is replaced by `BrandingConfig::fallback(now)`.
    /// - Content and team are sorted by `order_index`; roadmap by
    ///   `(year, order_index)`.
    /// - Any store failure fails the whole call.
    pub fn get_landing_page_data(&self) -> ServiceResult<LandingPageData> {
        self.assemble_landing_page().map_err(|err| {
            error!("event=landing_page_data module=service status=error error={err}");
            ServiceError::from(err)
        })
    }

    fn assemble_landing_page(&self) -> RepoResult<LandingPageData> {
        let branding = self
            .branding
            .first_branding()?
            .unwrap_or_else(|| BrandingConfig::fallback(Utc::now()));

        Ok(LandingPageData {
            branding,
            content: self.content.list_active_sections()?,
            team_members: self.team.list_active_members()?,
            roadmap_items: self.roadmap.list_active_items()?,
        })
    }

    /// Returns the authoritative branding row.
    pub fn get_branding_config(&self) -> ServiceResult<BrandingConfig> {
        match self.branding.first_branding() {
            Ok(Some(branding)) => Ok(branding),
            Ok(None) => Err(ServiceError::BrandingNotFound),
            Err(err) => {
                error!("event=branding_get module=service status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Applies a partial update to the authoritative branding row.
    ///
    /// # Contract
    /// - Only fields present in `patch` change; `updated_at` always advances.
    /// - Returns the full row as stored after the update.
    pub fn update_branding_config(
        &self,
        patch: &BrandingConfigPatch,
    ) -> ServiceResult<BrandingConfig> {
        let current = self.get_branding_config()?;
        match self.branding.update_branding(current.id, patch) {
            Ok(updated) => {
                info!(
                    "event=branding_update module=service status=ok id={} fields={}",
                    updated.id,
                    patch.assignments().len()
                );
                Ok(updated)
            }
            // Row vanished between lookup and update.
            Err(RepoError::NotFound(_)) => Err(ServiceError::BrandingNotFound),
            Err(err) => {
                error!("event=branding_update module=service status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Persists the built-in branding when no branding row exists yet.
    ///
    /// Returns the authoritative row either way.
    pub fn seed_default_branding(&self) -> ServiceResult<BrandingConfig> {
        if let Some(existing) = self.branding.first_branding()? {
            info!(
                "event=branding_seed module=service status=skipped id={}",
                existing.id
            );
            return Ok(existing);
        }

        let created = self.branding.create_branding(&NewBrandingConfig::default())?;
        info!(
            "event=branding_seed module=service status=ok id={}",
            created.id
        );
        Ok(created)
    }

    /// Creates one content section.
    pub fn create_landing_page_content(
        &self,
        input: &NewContentSection,
    ) -> ServiceResult<ContentSection> {
        input.validate()?;
        self.content
            .create_section(input)
            .map_err(|err| log_create_failure("landing_page_content", err))
    }

    /// Creates one team member.
    pub fn create_team_member(&self, input: &NewTeamMember) -> ServiceResult<TeamMember> {
        input.validate()?;
        self.team
            .create_member(input)
            .map_err(|err| log_create_failure("team_member", err))
    }

    /// Creates one roadmap item with the given (or default `planned`) status.
    pub fn create_roadmap_item(&self, input: &NewRoadmapItem) -> ServiceResult<RoadmapItem> {
        input.validate()?;
        self.roadmap
            .create_item(input)
            .map_err(|err| log_create_failure("roadmap_item", err))
    }
}

fn log_create_failure(entity: &str, err: RepoError) -> ServiceError {
    error!("event=record_create module=service status=error entity={entity} error={err}");
    err.into()
}
