//! Cairo-based rendering: full replay of the stroke store onto a surface.
//!
//! Rendering is deliberately non-incremental: every call repaints the
//! background and replays every committed stroke in store order, then the
//! in-progress stroke on top. Eraser strokes subtract pixel coverage from
//! everything replayed before them.

use super::color::Color;
use super::stroke::Stroke;
use crate::input::Tool;
use thiserror::Error;

/// Errors raised while preparing a render target.
///
/// Drawing itself never fails; only surface and context creation can.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to prepare render surface: {0}")]
    Surface(#[from] cairo::Error),
}

/// Fills the entire surface with a solid background color.
///
/// Must run before any stroke is replayed; erased areas punch through to
/// zero alpha, so the background is part of the replay, not beneath it.
pub fn render_background(ctx: &cairo::Context, background: Color) {
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(background.r, background.g, background.b, background.a);
    let _ = ctx.paint(); // Ignore errors - a failed paint just leaves the surface blank
    ctx.set_operator(cairo::Operator::Over);
}

/// Replays a slice of committed strokes in store order (oldest first).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke as one connected polyline through its points.
///
/// Round caps and joins throughout. The first point is also emitted as a
/// line target, so a one-point stroke renders as a round dot. Eraser
/// strokes are drawn with `DestOut`, which removes coverage wherever the
/// path passes; the operator is restored to `Over` before returning.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    let points = stroke.points();
    if points.is_empty() {
        return;
    }

    let color = stroke.color();
    match stroke.tool() {
        Tool::Pen => {
            ctx.set_operator(cairo::Operator::Over);
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        }
        Tool::Eraser => {
            // DestOut subtracts wherever the source has alpha; the source
            // color is irrelevant beyond its opacity.
            ctx.set_operator(cairo::Operator::DestOut);
            ctx.set_source_rgba(1.0, 1.0, 1.0, 1.0);
        }
    }
    ctx.set_line_width(stroke.width());
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(points[0].x, points[0].y);
    // Includes the first point: a single-point stroke becomes a
    // zero-length segment, drawn as a dot by the round cap.
    for point in points {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
    ctx.set_operator(cairo::Operator::Over);
}

/// Replays the full board state: background, committed strokes in order,
/// then the in-progress stroke (if any) on top.
pub fn render_board(
    ctx: &cairo::Context,
    background: Color,
    strokes: &[Stroke],
    live_stroke: Option<&Stroke>,
) {
    render_background(ctx, background);
    render_strokes(ctx, strokes);
    if let Some(live) = live_stroke {
        render_stroke(ctx, live);
    }
}

/// Renders the full board state into a fresh ARGB image surface.
///
/// The caller supplies the surface dimensions fixed at mount time.
pub fn render_to_image(
    width: i32,
    height: i32,
    background: Color,
    strokes: &[Stroke],
    live_stroke: Option<&Stroke>,
) -> Result<cairo::ImageSurface, RenderError> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_board(&ctx, background, strokes, live_stroke);
    }
    surface.flush();
    Ok(surface)
}
