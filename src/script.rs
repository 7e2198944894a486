//! Recorded gesture scripts.
//!
//! A script is a TOML description of a sketch session - surface dimensions
//! plus an ordered list of gestures (and undo/clear actions) - that can be
//! replayed through the full input pipeline exactly as an interactive host
//! would drive it.

use crate::config::ColorSpec;
use crate::input::{PointerInput, SketchState, SurfaceRect, Tool};
use anyhow::{Context, Result, bail};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A recorded sketch session.
///
/// # Example TOML
/// ```toml
/// width = 800
/// height = 600
/// background = "white"
///
/// [[gestures]]
/// tool = "pen"
/// color = "#6366f1"
/// width = 3.0
/// points = [[10, 10], [20, 10], [20, 20]]
///
/// [[gestures]]
/// action = "undo"
/// ```
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct Script {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Background override; the config default applies when omitted
    #[serde(default)]
    pub background: Option<ColorSpec>,
    /// Gestures in replay order
    #[serde(default)]
    pub gestures: Vec<GestureSpec>,
}

/// What a script entry does when replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GestureAction {
    /// Drag a stroke through `points` (the default)
    #[default]
    Draw,
    /// Undo the most recent committing operation
    Undo,
    /// Clear the board (itself one undo step)
    Clear,
}

/// One replayed gesture or board action.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GestureSpec {
    /// Action performed by this entry
    #[serde(default)]
    pub action: GestureAction,
    /// Tool override for this gesture; the live tool is kept when omitted
    #[serde(default)]
    pub tool: Option<Tool>,
    /// Color override for this gesture
    #[serde(default)]
    pub color: Option<ColorSpec>,
    /// Width override for this gesture, in pixels
    #[serde(default)]
    pub width: Option<f64>,
    /// Surface-local points in drawing order (`[[x, y], ...]`)
    #[serde(default)]
    pub points: Vec<(f64, f64)>,
}

impl Script {
    /// Loads and validates a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let script_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;

        let script: Script = toml::from_str(&script_str)
            .with_context(|| format!("Failed to parse script from {}", path.display()))?;

        script.validate()?;
        Ok(script)
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "Script surface dimensions must be non-zero (got {}x{})",
                self.width,
                self.height
            );
        }
        for (index, gesture) in self.gestures.iter().enumerate() {
            if gesture.action == GestureAction::Draw && gesture.points.is_empty() {
                bail!("Gesture {index} draws but has no points");
            }
        }
        Ok(())
    }

    /// Replays the script onto a sketch state.
    ///
    /// Mounts the surface at the script dimensions, then feeds each gesture
    /// through press/motion/release in order. Undo and clear entries call
    /// the corresponding board operations.
    pub fn replay(&self, state: &mut SketchState) {
        state.mount(self.width, self.height);
        if let Some(background) = &self.background {
            state.background = background.to_color();
        }

        let rect = SurfaceRect::at_origin(self.width as f64, self.height as f64);

        for gesture in &self.gestures {
            match gesture.action {
                GestureAction::Draw => {
                    if let Some(tool) = gesture.tool {
                        state.set_tool(tool);
                    }
                    if let Some(color) = &gesture.color {
                        state.set_color(color.to_color());
                    }
                    if let Some(width) = gesture.width {
                        state.set_width(width);
                    }

                    let (x0, y0) = gesture.points[0];
                    state.on_pointer_press(&PointerInput::mouse(x0, y0), &rect);
                    for &(x, y) in &gesture.points[1..] {
                        state.on_pointer_motion(&PointerInput::mouse(x, y), &rect);
                    }
                    state.on_pointer_release();
                }
                GestureAction::Undo => {
                    if !state.undo() {
                        log::debug!("Script undo with empty undo buffer; ignored");
                    }
                }
                GestureAction::Clear => state.clear_board(),
            }
        }

        log::info!(
            "Replayed {} script entries; {} strokes on board",
            self.gestures.len(),
            state.board.len()
        );
    }
}
