//! Aggregate consumed by a single page render.

use super::branding::BrandingConfig;
use super::content::ContentSection;
use super::roadmap::RoadmapItem;
use super::team::TeamMember;
use serde::{Deserialize, Serialize};

/// Branding plus every active section, member and milestone, display-ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageData {
    pub branding: BrandingConfig,
    pub content: Vec<ContentSection>,
    pub team_members: Vec<TeamMember>,
    pub roadmap_items: Vec<RoadmapItem>,
}
