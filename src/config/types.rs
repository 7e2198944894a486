//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::expand_tilde;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing-related settings.
///
/// Controls the default tool, color, and width when the surface first
/// mounts. Hosts can change these values at runtime through the live
/// controls.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default tool ("pen" or "eraser")
    #[serde(default)]
    pub default_tool: Tool,

    /// Default pen color - a named palette color, a `#rrggbb` hex string,
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_width")]
    pub default_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

/// Surface appearance settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Solid background color the surface is cleared to before each replay
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported drawings are written to. Supports a leading `~`.
    /// Defaults to `<pictures>/Inkboard`.
    #[serde(default)]
    pub directory: Option<String>,

    /// Filename prefix; exports are named `<prefix>-<unix-ms>.png`.
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_prefix: default_filename_prefix(),
        }
    }
}

impl ExportConfig {
    /// Resolves the configured export directory, falling back to
    /// `<pictures>/Inkboard` (or the home directory when no picture
    /// directory exists).
    pub fn resolve_directory(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => expand_tilde(dir),
            None => dirs::picture_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Inkboard"),
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#6366f1".to_string())
}

fn default_width() -> f64 {
    3.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_filename_prefix() -> String {
    "drawing".to_string()
}
