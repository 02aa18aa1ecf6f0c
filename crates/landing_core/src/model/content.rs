//! Prose section model (about, features, tokenomics, ...).

use super::{default_active, ensure_non_negative, RecordId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Persisted content section.
///
/// `section_name` is a free-form tag and may repeat across rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    pub id: RecordId,
    pub section_name: String,
    pub title: String,
    pub content: String,
    pub order_index: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Creation input for a content section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContentSection {
    pub section_name: String,
    pub title: String,
    pub content: String,
    pub order_index: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl NewContentSection {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative("order_index", self.order_index)
    }
}

#[cfg(test)]
mod tests {
    use super::NewContentSection;
    use crate::model::ValidationError;

    #[test]
    fn is_active_defaults_to_true() {
        let input: NewContentSection = serde_json::from_str(
            r#"{"section_name":"about","title":"About","content":"...","order_index":0}"#,
        )
        .unwrap();
        assert!(input.is_active);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn negative_order_index_is_rejected() {
        let input = NewContentSection {
            section_name: "about".to_string(),
            title: "About".to_string(),
            content: "...".to_string(),
            order_index: -1,
            is_active: true,
        };
        assert_eq!(
            input.validate(),
            Err(ValidationError::NegativeOrderIndex {
                field: "order_index",
                value: -1
            })
        );
    }
}
