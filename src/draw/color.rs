//! RGBA color type, hex parsing, and the predefined sketch palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0-1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color from 8-bit RGB components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses a `#rrggbb` hex string into a fully opaque color.
    ///
    /// Returns `None` for anything that is not exactly `#` followed by six
    /// hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::from_rgb8(r, g, b))
    }
}

// ============================================================================
// Predefined Color Constants (sketch palette)
// ============================================================================

/// Default pen color (indigo, `#6366f1`).
pub const INDIGO: Color = Color::from_rgb8(0x63, 0x66, 0xf1);

/// Predefined blue (`#3b82f6`).
pub const BLUE: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);

/// Predefined green (`#10b981`).
pub const GREEN: Color = Color::from_rgb8(0x10, 0xb9, 0x81);

/// Predefined amber (`#f59e0b`).
pub const AMBER: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);

/// Predefined red (`#ef4444`).
pub const RED: Color = Color::from_rgb8(0xef, 0x44, 0x44);

/// Predefined violet (`#8b5cf6`).
pub const VIOLET: Color = Color::from_rgb8(0x8b, 0x5c, 0xf6);

/// Predefined cyan (`#06b6d4`).
pub const CYAN: Color = Color::from_rgb8(0x06, 0xb6, 0xd4);

/// Predefined lime (`#84cc16`).
pub const LIME: Color = Color::from_rgb8(0x84, 0xcc, 0x16);

/// Predefined orange (`#f97316`).
pub const ORANGE: Color = Color::from_rgb8(0xf9, 0x73, 0x16);

/// Predefined pink (`#ec4899`).
pub const PINK: Color = Color::from_rgb8(0xec, 0x48, 0x99);

/// Predefined black.
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// Predefined gray (`#6b7280`).
pub const GRAY: Color = Color::from_rgb8(0x6b, 0x72, 0x80);

/// Predefined white (default surface background).
pub const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

/// Maps a palette color name to its [`Color`] value.
///
/// Returns `None` for unknown names; callers decide the fallback.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "indigo" => Some(INDIGO),
        "blue" => Some(BLUE),
        "green" => Some(GREEN),
        "amber" | "yellow" => Some(AMBER),
        "red" => Some(RED),
        "violet" | "purple" => Some(VIOLET),
        "cyan" => Some(CYAN),
        "lime" => Some(LIME),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "black" => Some(BLACK),
        "gray" | "grey" => Some(GRAY),
        "white" => Some(WHITE),
        _ => None,
    }
}
