//! Landing page domain model.
//!
//! # Responsibility
//! - Define the persisted record shapes for the four entity kinds.
//! - Define creation inputs and the branding patch used by write paths.
//! - Define the aggregate returned to page renderers.
//!
//! # Invariants
//! - `id`, `created_at` and `updated_at` are assigned by the store, never by
//!   callers.
//! - Entity kinds are independent; there are no cross-entity references.
//! - Inactive records stay persisted and are only hidden from read aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub mod branding;
pub mod content;
pub mod landing;
pub mod roadmap;
pub mod team;

/// Store-assigned record identity.
pub type RecordId = i64;

/// Store-assigned instant, serialized as RFC 3339 UTC.
pub type Timestamp = DateTime<Utc>;

/// Input rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`{field}` must be non-negative, got {value}")]
    NegativeOrderIndex { field: &'static str, value: i64 },
}

pub(crate) fn ensure_non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeOrderIndex { field, value });
    }
    Ok(())
}

pub(crate) fn default_active() -> bool {
    true
}

/// Wraps any value that is present in the input, including an explicit
/// `null` for `Option` targets. Paired with `#[serde(default)]` so that an
/// absent key stays `None`.
pub(crate) fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
