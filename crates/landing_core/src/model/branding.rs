//! Branding configuration model.
//!
//! # Invariants
//! - Only the first row (lowest `id`) is authoritative; extra rows are
//!   tolerated but never read.
//! - `logo_url` and `favicon_url` are null when unset, never empty strings.

use super::{present, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BRANDING_ID: RecordId = 1;
pub const DEFAULT_PRIMARY_COLOR: &str = "#6366f1";
pub const DEFAULT_SECONDARY_COLOR: &str = "#1f2937";
pub const DEFAULT_ACCENT_COLOR: &str = "#f59e0b";
pub const DEFAULT_FONT_FAMILY: &str = "Inter, sans-serif";
pub const DEFAULT_COIN_NAME: &str = "ultaCoin";
pub const DEFAULT_COIN_SYMBOL: &str = "ULTA";

/// Persisted site-wide branding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingConfig {
    pub id: RecordId,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    /// CSS font-family value.
    pub font_family: String,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub coin_name: String,
    pub coin_symbol: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BrandingConfig {
    /// Builds the built-in branding shown when no row exists yet.
    ///
    /// The result is never written back; both timestamps are `now`.
    pub fn fallback(now: Timestamp) -> Self {
        let defaults = NewBrandingConfig::default();
        Self {
            id: DEFAULT_BRANDING_ID,
            primary_color: defaults.primary_color,
            secondary_color: defaults.secondary_color,
            accent_color: defaults.accent_color,
            font_family: defaults.font_family,
            logo_url: defaults.logo_url,
            favicon_url: defaults.favicon_url,
            coin_name: defaults.coin_name,
            coin_symbol: defaults.coin_symbol,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Insert shape for a branding row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBrandingConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font_family: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
    pub coin_name: String,
    pub coin_symbol: String,
}

impl Default for NewBrandingConfig {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            logo_url: None,
            favicon_url: None,
            coin_name: DEFAULT_COIN_NAME.to_string(),
            coin_symbol: DEFAULT_COIN_SYMBOL.to_string(),
        }
    }
}

/// Column value carried by a branding patch assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandingValue<'a> {
    Text(&'a str),
    Null,
}

/// Partial branding update.
///
/// Absent keys are `None` and leave the stored column untouched. For the
/// nullable URL columns, `Some(None)` (an explicit JSON `null`) clears the
/// stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingConfigPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub coin_name: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub coin_symbol: Option<String>,
}

impl BrandingConfigPatch {
    /// Returns `(column, value)` pairs for present fields only, in schema order.
    pub fn assignments(&self) -> Vec<(&'static str, BrandingValue<'_>)> {
        let mut out = Vec::new();
        push_text(&mut out, "primary_color", &self.primary_color);
        push_text(&mut out, "secondary_color", &self.secondary_color);
        push_text(&mut out, "accent_color", &self.accent_color);
        push_text(&mut out, "font_family", &self.font_family);
        push_nullable(&mut out, "logo_url", &self.logo_url);
        push_nullable(&mut out, "favicon_url", &self.favicon_url);
        push_text(&mut out, "coin_name", &self.coin_name);
        push_text(&mut out, "coin_symbol", &self.coin_symbol);
        out
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }
}

fn push_text<'a>(
    out: &mut Vec<(&'static str, BrandingValue<'a>)>,
    column: &'static str,
    value: &'a Option<String>,
) {
    if let Some(value) = value {
        out.push((column, BrandingValue::Text(value)));
    }
}

fn push_nullable<'a>(
    out: &mut Vec<(&'static str, BrandingValue<'a>)>,
    column: &'static str,
    value: &'a Option<Option<String>>,
) {
    match value {
        Some(Some(value)) => out.push((column, BrandingValue::Text(value))),
        Some(None) => out.push((column, BrandingValue::Null)),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::{BrandingConfig, BrandingConfigPatch, BrandingValue};
    use chrono::Utc;

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let patch: BrandingConfigPatch =
            serde_json::from_str(r#"{"logo_url": null, "coin_name": "NewCoin"}"#).unwrap();

        assert_eq!(patch.logo_url, Some(None));
        assert_eq!(patch.favicon_url, None);
        assert_eq!(
            patch.assignments(),
            vec![
                ("logo_url", BrandingValue::Null),
                ("coin_name", BrandingValue::Text("NewCoin")),
            ]
        );
    }

    #[test]
    fn patch_rejects_null_for_required_columns() {
        let result = serde_json::from_str::<BrandingConfigPatch>(r#"{"coin_name": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_patch_has_no_assignments() {
        let patch: BrandingConfigPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_serialization_keeps_explicit_null() {
        let patch = BrandingConfigPatch {
            favicon_url: Some(None),
            ..BrandingConfigPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "favicon_url": null }));
    }

    #[test]
    fn fallback_uses_fixed_values() {
        let now = Utc::now();
        let branding = BrandingConfig::fallback(now);
        assert_eq!(branding.id, 1);
        assert_eq!(branding.primary_color, "#6366f1");
        assert_eq!(branding.secondary_color, "#1f2937");
        assert_eq!(branding.accent_color, "#f59e0b");
        assert_eq!(branding.font_family, "Inter, sans-serif");
        assert_eq!(branding.logo_url, None);
        assert_eq!(branding.favicon_url, None);
        assert_eq!(branding.coin_name, "ultaCoin");
        assert_eq!(branding.coin_symbol, "ULTA");
        assert_eq!(branding.created_at, now);
        assert_eq!(branding.updated_at, now);
    }
}
