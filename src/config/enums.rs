//! Configuration enum types.

use crate::draw::{Color, color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named palette color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named palette color
/// default_color = "indigo"
///
/// # Hex color
/// default_color = "#6366f1"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named palette color (indigo, blue, green, amber, red, violet, cyan,
    /// lime, orange, pink, black, gray, white) or a `#rrggbb` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Hex strings (leading `#`) are parsed directly; other names go
    /// through the palette lookup. Unknown values default to indigo with a
    /// warning. RGB arrays are converted from 0-255 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => {
                let parsed = if name.starts_with('#') {
                    Color::from_hex(name)
                } else {
                    color::name_to_color(name)
                };
                parsed.unwrap_or_else(|| {
                    warn!("Unknown color '{}', using indigo", name);
                    color::INDIGO
                })
            }
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_hex_and_rgb_specs_agree() {
        assert_eq!(ColorSpec::Name("indigo".into()).to_color(), color::INDIGO);
        assert_eq!(ColorSpec::Name("#6366f1".into()).to_color(), color::INDIGO);
        assert_eq!(ColorSpec::Rgb([0x63, 0x66, 0xf1]).to_color(), color::INDIGO);
    }

    #[test]
    fn unknown_name_falls_back_to_indigo() {
        assert_eq!(ColorSpec::Name("plaid".into()).to_color(), color::INDIGO);
        assert_eq!(ColorSpec::Name("#12345".into()).to_color(), color::INDIGO);
    }
}
