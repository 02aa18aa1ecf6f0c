//! Team roster model.

use super::{default_active, ensure_non_negative, RecordId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Persisted team member. Image and social URLs are independently nullable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: RecordId,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub order_index: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Creation input for a team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeamMember {
    pub name: String,
    pub position: String,
    pub bio: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    pub order_index: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl NewTeamMember {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative("order_index", self.order_index)
    }
}
