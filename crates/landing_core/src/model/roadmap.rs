//! Roadmap timeline model.
//!
//! # Invariants
//! - `status` is a closed set; transitions between values are not enforced.
//! - Display order is `(year, order_index)`, year first.

use super::{default_active, ensure_non_negative, RecordId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Progress tag for a roadmap milestone.
///
/// `planned -> in_progress -> completed` is the suggested progression only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

impl RoadmapStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planned" => Some(Self::Planned),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Persisted roadmap milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Free-form period label, e.g. `Q1`.
    pub quarter: String,
    pub year: i32,
    pub status: RoadmapStatus,
    pub order_index: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Creation input for a roadmap milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoadmapItem {
    pub title: String,
    pub description: String,
    pub quarter: String,
    pub year: i32,
    #[serde(default)]
    pub status: RoadmapStatus,
    pub order_index: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl NewRoadmapItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative("order_index", self.order_index)
    }
}
