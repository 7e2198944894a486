//! Sketch state: the drawing session, gesture state machine, and pointer
//! handlers.

mod core;
mod pointer;

#[cfg(test)]
mod tests;

pub use self::core::{GestureState, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, SketchState};
