//! Core domain logic for the coin landing page.
//! This crate is the single source of truth for content invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::branding::{BrandingConfig, BrandingConfigPatch, NewBrandingConfig};
pub use model::content::{ContentSection, NewContentSection};
pub use model::landing::LandingPageData;
pub use model::roadmap::{NewRoadmapItem, RoadmapItem, RoadmapStatus};
pub use model::team::{NewTeamMember, TeamMember};
pub use model::{RecordId, Timestamp, ValidationError};
pub use repo::branding_repo::{BrandingRepository, SqliteBrandingRepository};
pub use repo::content_repo::{ContentRepository, SqliteContentRepository};
pub use repo::roadmap_repo::{RoadmapRepository, SqliteRoadmapRepository};
pub use repo::team_repo::{SqliteTeamRepository, TeamRepository};
pub use repo::{RepoError, RepoResult};
pub use service::landing_service::{
    LandingPageService, ServiceError, ServiceResult, SqliteLandingPageService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
