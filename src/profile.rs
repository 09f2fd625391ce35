//! Serializable customization profile.
//!
//! A [`CustomizationProfile`] captures a selection in a JSON-friendly form so
//! it can be saved to disk, handed to the command-line tool, or exchanged
//! between processes.
//!
//! # Example
//!
//! ```
//! use icony_renderer::{CustomizationProfile, HexColor};
//!
//! let profile = CustomizationProfile::new()
//!     .with_icon("fa-flask")
//!     .with_color(HexColor::new(0x3B, 0x82, 0xF6))
//!     .with_size(256);
//!
//! let json = profile.to_json().unwrap();
//! let restored = CustomizationProfile::from_json(&json).unwrap();
//! assert_eq!(restored.size, Some(256));
//! ```

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

// ============================================================================
// CustomizationProfile
// ============================================================================

/// A serializable snapshot of the customization settings.
///
/// Every field is optional; absent fields leave the current setting alone
/// when the profile is applied.
///
/// # JSON Format
///
/// ```json
/// {
///   "icon": "lucide-heart",
///   "color": "#EF4444",
///   "size": 128,
///   "strokeWeight": 1.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationProfile {
    /// Catalog id of the selected icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,

    /// Pixel size; clamped when applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Stroke weight for stroke-based libraries; clamped when applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f32>,
}

impl CustomizationProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icon(mut self, id: impl Into<String>) -> Self {
        self.icon = Some(id.into());
        self
    }

    pub fn with_color(mut self, color: HexColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_stroke_weight(mut self, stroke_weight: f32) -> Self {
        self.stroke_weight = Some(stroke_weight);
        self
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
