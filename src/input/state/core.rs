//! Sketch state machine and drawing session management.

use crate::config::{Config, ExportConfig};
use crate::draw::{Board, Color, RenderError, Stroke, render_board, render_to_image};
use crate::export::{ExportError, save_surface};
use crate::input::tool::Tool;
use std::path::PathBuf;

/// Minimum stroke width in pixels.
pub const MIN_STROKE_WIDTH: f64 = 1.0;
/// Maximum stroke width in pixels.
pub const MAX_STROKE_WIDTH: f64 = 20.0;

/// Current gesture state machine.
///
/// A gesture is one continuous pointer engagement from press to release.
/// The in-progress stroke exists only while a gesture is active; it is
/// cleared on commit.
#[derive(Debug)]
pub enum GestureState {
    /// No gesture in progress - waiting for pointer input
    Idle,
    /// Gesture in progress, accumulating points
    Active {
        /// The in-progress stroke; tool/color/width locked at gesture start
        stroke: Stroke,
    },
}

/// Main sketch state: the stroke store, live drawing parameters, and the
/// gesture state machine.
///
/// All state is exclusively owned here and mutated synchronously in
/// response to discrete input events; there is no background work. Every
/// change to the store, the in-progress stroke, or the live tool, color,
/// or width sets `needs_redraw` - rendering always replays the full store.
pub struct SketchState {
    /// Committed strokes plus the undo buffer
    pub board: Board,
    /// Tool applied to the next stroke (active strokes keep their own)
    pub current_tool: Tool,
    /// Color applied to the next stroke
    pub current_color: Color,
    /// Stroke width in pixels applied to the next stroke
    pub current_width: f64,
    /// Solid background the surface is cleared to before replay
    pub background: Color,
    /// Current gesture state machine
    pub state: GestureState,
    /// Whether the surface needs to be redrawn
    pub needs_redraw: bool,
    /// Surface width in pixels, fixed at first mount (0 = not mounted)
    surface_width: i32,
    /// Surface height in pixels, fixed at first mount (0 = not mounted)
    surface_height: i32,
}

impl SketchState {
    /// Creates a new sketch state with the given drawing defaults.
    ///
    /// Surface dimensions start unset; the embedding host supplies them
    /// once via [`mount`](Self::mount).
    pub fn with_defaults(tool: Tool, color: Color, width: f64, background: Color) -> Self {
        Self {
            board: Board::new(),
            current_tool: tool,
            current_color: color,
            current_width: width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
            background,
            state: GestureState::Idle,
            needs_redraw: true,
            surface_width: 0,
            surface_height: 0,
        }
    }

    /// Creates a sketch state from loaded configuration defaults.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.default_tool,
            config.drawing.default_color.to_color(),
            config.drawing.default_width,
            config.surface.background.to_color(),
        )
    }

    /// Fixes the surface dimensions at first layout.
    ///
    /// Dimensions are set once; later calls are ignored (the surface is not
    /// recalculated on resize). Zero dimensions leave the surface unmounted.
    pub fn mount(&mut self, width: u32, height: u32) {
        if self.is_mounted() {
            log::debug!(
                "Ignoring mount({width}, {height}); surface fixed at {}x{}",
                self.surface_width,
                self.surface_height
            );
            return;
        }
        self.surface_width = width.min(i32::MAX as u32) as i32;
        self.surface_height = height.min(i32::MAX as u32) as i32;
        if self.is_mounted() {
            self.needs_redraw = true;
            log::debug!("Surface mounted at {width}x{height}");
        }
    }

    /// Whether the host has supplied usable surface dimensions yet.
    pub fn is_mounted(&self) -> bool {
        self.surface_width > 0 && self.surface_height > 0
    }

    /// The fixed surface dimensions, if mounted.
    pub fn surface_size(&self) -> Option<(i32, i32)> {
        self.is_mounted()
            .then_some((self.surface_width, self.surface_height))
    }

    /// The in-progress stroke, if a gesture is active.
    pub fn live_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            GestureState::Active { stroke } => Some(stroke),
            GestureState::Idle => None,
        }
    }

    /// Selects the tool for subsequent strokes.
    ///
    /// Controls stay live during a gesture, but the active stroke keeps the
    /// tool it started with.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.current_tool != tool {
            self.current_tool = tool;
            self.needs_redraw = true;
            log::debug!("Tool set to {tool:?}");
        }
    }

    /// Selects the color for subsequent strokes.
    pub fn set_color(&mut self, color: Color) {
        if self.current_color != color {
            self.current_color = color;
            self.needs_redraw = true;
        }
    }

    /// Sets the stroke width for subsequent strokes, clamped to the
    /// 1.0-20.0 pixel range.
    pub fn set_width(&mut self, width: f64) {
        let width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        if self.current_width != width {
            self.current_width = width;
            self.needs_redraw = true;
            log::debug!("Stroke width set to {width:.1}px");
        }
    }

    /// Restores the store to its most recent snapshot.
    ///
    /// Returns `false` (a silent no-op) when the undo buffer is empty.
    pub fn undo(&mut self) -> bool {
        if self.board.undo() {
            self.needs_redraw = true;
            true
        } else {
            false
        }
    }

    /// Empties the store, recording one undo step, and drops any
    /// in-progress stroke.
    pub fn clear_board(&mut self) {
        self.board.clear();
        self.state = GestureState::Idle;
        self.needs_redraw = true;
    }

    /// Replays the full surface onto a host-owned Cairo context.
    pub fn render(&self, ctx: &cairo::Context) {
        render_board(
            ctx,
            self.background,
            self.board.strokes(),
            self.live_stroke(),
        );
    }

    /// Renders the current surface pixels into a fresh image surface.
    ///
    /// Returns `Ok(None)` while the surface is unmounted - nothing to draw
    /// yet, recoverable once the host supplies dimensions.
    pub fn render_to_image(&self) -> Result<Option<cairo::ImageSurface>, RenderError> {
        let Some((width, height)) = self.surface_size() else {
            log::debug!("render_to_image before mount; nothing to draw yet");
            return Ok(None);
        };
        let surface = render_to_image(
            width,
            height,
            self.background,
            self.board.strokes(),
            self.live_stroke(),
        )?;
        Ok(Some(surface))
    }

    /// Exports the current surface pixels as a PNG file.
    ///
    /// The filename is `<prefix>-<unix-ms>.png` in the configured export
    /// directory. Returns `Ok(None)` while the surface is unmounted. Export
    /// has no effect on the sketch state.
    pub fn export_png(&self, config: &ExportConfig) -> Result<Option<PathBuf>, ExportError> {
        let Some(surface) = self.render_to_image()? else {
            return Ok(None);
        };
        let path = save_surface(&surface, config)?;
        Ok(Some(path))
    }
}
