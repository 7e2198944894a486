//! Stroke and point definitions for the sketch surface.

use super::color::Color;
use crate::input::Tool;

/// A single captured pointer position in surface-local coordinates.
///
/// Coordinates are pixels relative to the surface's own top-left corner,
/// non-negative and bounded by the surface dimensions at capture time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal offset from the surface's left edge
    pub x: f64,
    /// Vertical offset from the surface's top edge
    pub y: f64,
}

impl Point {
    /// Creates a point from surface-local coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The committed drawing result of one gesture.
///
/// Tool, color, and width are locked in when the gesture starts and stay
/// fixed for the stroke's lifetime; live control changes only affect the
/// next stroke. A stroke is never mutated after it is committed to the
/// [`Board`](super::Board).
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    tool: Tool,
    color: Color,
    width: f64,
}

impl Stroke {
    /// Starts a new stroke seeded with its first point.
    pub fn begin(first: Point, tool: Tool, color: Color, width: f64) -> Self {
        Self {
            points: vec![first],
            tool,
            color,
            width,
        }
    }

    /// Appends a point to an in-progress stroke (drawing order preserved).
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// The captured points, in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The tool this stroke was drawn with.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The stroke width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Number of captured points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color;

    #[test]
    fn begin_seeds_stroke_with_first_point() {
        let stroke = Stroke::begin(Point::new(10.0, 10.0), Tool::Pen, color::INDIGO, 3.0);
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.points()[0], Point::new(10.0, 10.0));
        assert_eq!(stroke.tool(), Tool::Pen);
    }

    #[test]
    fn push_preserves_drawing_order() {
        let mut stroke = Stroke::begin(Point::new(10.0, 10.0), Tool::Pen, color::INDIGO, 3.0);
        stroke.push(Point::new(20.0, 10.0));
        stroke.push(Point::new(20.0, 20.0));

        let xs: Vec<(f64, f64)> = stroke.points().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xs, vec![(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]);
    }
}
