//! Rendering primitives and stroke definitions (Cairo-based).
//!
//! This module defines the core drawing types for the sketch surface:
//! - [`Color`]: RGBA color representation with the predefined palette
//! - [`Stroke`]: an immutable committed gesture (points, tool, color, width)
//! - [`Board`]: the ordered stroke store plus its undo buffer
//! - Rendering functions for Cairo-based full-replay output

pub mod board;
pub mod color;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use board::Board;
pub use color::Color;
pub use render::{RenderError, render_board, render_stroke, render_strokes, render_to_image};
pub use stroke::{Point, Stroke};

// Re-export palette constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{
    AMBER, BLACK, BLUE, CYAN, GRAY, GREEN, INDIGO, LIME, ORANGE, PINK, RED, VIOLET, WHITE,
};
