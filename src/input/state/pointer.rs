//! Pointer event handlers: the gesture state machine transitions.

use crate::draw::Stroke;
use crate::input::events::PointerInput;
use crate::input::tracker::{SurfaceRect, surface_position};

use super::{GestureState, SketchState};

impl SketchState {
    /// Processes a pointer press (mouse down / touch start).
    ///
    /// Idle -> Active: seeds the in-progress stroke with one point, locking
    /// the live tool/color/width for the stroke's duration. A press during
    /// an active gesture is ignored.
    pub fn on_pointer_press(&mut self, input: &PointerInput, rect: &SurfaceRect) {
        if !matches!(self.state, GestureState::Idle) {
            return;
        }
        let point = surface_position(input, rect);
        self.state = GestureState::Active {
            stroke: Stroke::begin(
                point,
                self.current_tool,
                self.current_color,
                self.current_width,
            ),
        };
        self.needs_redraw = true;
    }

    /// Processes pointer motion while the pointer remains engaged.
    ///
    /// Appends a point to the in-progress stroke; motion without an active
    /// gesture is ignored.
    pub fn on_pointer_motion(&mut self, input: &PointerInput, rect: &SurfaceRect) {
        if let GestureState::Active { stroke } = &mut self.state {
            stroke.push(surface_position(input, rect));
            self.needs_redraw = true;
        }
    }

    /// Processes a pointer release (mouse up / touch end).
    ///
    /// Active -> Idle: commits the accumulated stroke to the board. A press
    /// immediately followed by release commits a one-point stroke; a
    /// gesture that somehow accumulated no points is a no-op (no commit,
    /// no undo entry).
    pub fn on_pointer_release(&mut self) {
        self.finish_gesture();
    }

    /// Processes the pointer leaving the drawing surface mid-gesture.
    ///
    /// Treated identically to a release: the partial stroke is committed,
    /// not discarded.
    pub fn on_pointer_leave(&mut self) {
        self.finish_gesture();
    }

    fn finish_gesture(&mut self) {
        let state = std::mem::replace(&mut self.state, GestureState::Idle);
        if let GestureState::Active { stroke } = state {
            if !stroke.is_empty() {
                self.board.commit(stroke);
            }
            self.needs_redraw = true;
        }
    }
}
