//! Pointer coordinate normalization.
//!
//! Converts raw client-space pointer/touch positions into surface-local
//! coordinates relative to the drawing surface's on-screen bounding
//! rectangle. Drawing is non-critical, so malformed input degrades to the
//! origin instead of erroring.

use super::events::PointerInput;
use crate::draw::Point;

/// The drawing surface's on-screen bounding rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    /// Left edge in client coordinates
    pub left: f64,
    /// Top edge in client coordinates
    pub top: f64,
    /// Surface width in pixels
    pub width: f64,
    /// Surface height in pixels
    pub height: f64,
}

impl SurfaceRect {
    /// A rectangle anchored at the client origin, as used by hosts that
    /// deliver surface-local coordinates directly.
    pub fn at_origin(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }
}

/// Normalizes a raw pointer event into a surface-local [`Point`].
///
/// `x = client_x - rect.left`, `y = client_y - rect.top`. For touch input
/// only the first contact is used; a touch event with no contacts yields
/// the origin. Results are clamped into the surface bounds, so coordinates
/// are always non-negative and bounded by the surface dimensions at
/// capture time.
pub fn surface_position(input: &PointerInput, rect: &SurfaceRect) -> Point {
    let (client_x, client_y) = match input {
        PointerInput::Mouse { client_x, client_y } => (*client_x, *client_y),
        PointerInput::Touch { contacts } => match contacts.first() {
            Some(contact) => (contact.client_x, contact.client_y),
            None => return Point::new(0.0, 0.0),
        },
    };

    let x = (client_x - rect.left).clamp(0.0, rect.width.max(0.0));
    let y = (client_y - rect.top).clamp(0.0, rect.height.max(0.0));
    Point::new(x, y)
}
