//! Input handling: pointer events, coordinate tracking, and the gesture
//! state machine.
//!
//! This module translates host pointer/touch events into drawing actions.
//! It maintains the current tool state, drawing parameters (color, width),
//! and the gesture state machine (idle, active).

pub mod events;
pub mod state;
pub mod tool;
pub mod tracker;

// Re-export commonly used types at module level
pub use events::{PointerInput, TouchContact};
pub use state::{GestureState, SketchState};
pub use tool::Tool;
pub use tracker::{SurfaceRect, surface_position};
