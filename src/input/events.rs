//! Generic pointer event types for cross-host compatibility.

/// A single touch contact in client (page) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchContact {
    /// Horizontal position in client coordinates
    pub client_x: f64,
    /// Vertical position in client coordinates
    pub client_y: f64,
}

/// Raw pointer input as delivered by the embedding host.
///
/// Host implementations map their native mouse/touch events to these
/// generic values; the tracker normalizes them into surface-local
/// coordinates. Positions are in client (page) space, independent of the
/// surface's placement.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mouse pointer position
    Mouse {
        /// Horizontal position in client coordinates
        client_x: f64,
        /// Vertical position in client coordinates
        client_y: f64,
    },
    /// Touch contacts; only the first contact is used for drawing
    Touch {
        /// Active contacts in host order
        contacts: Vec<TouchContact>,
    },
}

impl PointerInput {
    /// Convenience constructor for a mouse position.
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self::Mouse { client_x, client_y }
    }

    /// Convenience constructor for a single-contact touch.
    pub fn touch(client_x: f64, client_y: f64) -> Self {
        Self::Touch {
            contacts: vec![TouchContact { client_x, client_y }],
        }
    }
}
