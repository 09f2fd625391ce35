//! Hex color values and the preset palette.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

// ============================================================================
// HexColor
// ============================================================================

/// An opaque sRGB color written as `#RRGGBB`.
///
/// Parsing accepts `#rgb`, `#rrggbb` and the same forms without the leading
/// `#`, case-insensitively. Formatting always produces uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    pub fn red(&self) -> u8 {
        self.0.red
    }

    pub fn green(&self) -> u8 {
        self.0.green
    }

    pub fn blue(&self) -> u8 {
        self.0.blue
    }

    /// Returns the color as an `(r, g, b)` tuple.
    pub fn as_tuple(&self) -> (u8, u8, u8) {
        (self.0.red, self.0.green, self.0.blue)
    }

    /// The six hex digits without the leading `#`, as used in share links.
    pub fn to_hex_digits(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0.red, self.0.green, self.0.blue)
    }

    /// Name of the preset with exactly this color, if any.
    pub fn preset_name(&self) -> Option<&'static str> {
        PRESET_COLORS
            .iter()
            .find(|preset| preset.color() == *self)
            .map(|preset| preset.name)
    }

    /// Lowercase preset name for file names, or `"custom"`.
    pub fn file_label(&self) -> String {
        self.preset_name()
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "custom".to_string())
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex_digits())
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<Srgb<u8>>()
            .map(Self)
            .map_err(|_| ColorParseError {
                input: trimmed.to_string(),
            })
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

// ============================================================================
// Presets
// ============================================================================

/// A named swatch in the preset palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColor {
    pub name: &'static str,
    rgb: (u8, u8, u8),
}

impl PresetColor {
    pub fn color(&self) -> HexColor {
        let (r, g, b) = self.rgb;
        HexColor::new(r, g, b)
    }
}

/// The preset swatches offered by the color selector.
pub const PRESET_COLORS: &[PresetColor] = &[
    PresetColor { name: "Black", rgb: (0x00, 0x00, 0x00) },
    PresetColor { name: "White", rgb: (0xFF, 0xFF, 0xFF) },
    PresetColor { name: "Red", rgb: (0xEF, 0x44, 0x44) },
    PresetColor { name: "Blue", rgb: (0x3B, 0x82, 0xF6) },
    PresetColor { name: "Green", rgb: (0x10, 0xB9, 0x81) },
    PresetColor { name: "Yellow", rgb: (0xF5, 0x9E, 0x0B) },
    PresetColor { name: "Purple", rgb: (0x8B, 0x5C, 0xF6) },
    PresetColor { name: "Pink", rgb: (0xEC, 0x48, 0x99) },
];
