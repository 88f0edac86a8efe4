//! Container geometry in client (viewport) space.

use glam::Vec2;

/// On-screen bounding rectangle of a container, in the same coordinate
/// space as pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge in client pixels.
    pub left: f32,
    /// Top edge in client pixels.
    pub top: f32,
    /// Width in client pixels.
    pub width: f32,
    /// Height in client pixels.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its left/top corner and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Width and height as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Center relative to the rectangle's own origin (half the size).
    #[must_use]
    pub fn local_center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Convert a client-space point to rectangle-local coordinates.
    #[must_use]
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - self.origin()
    }

    /// Whether either dimension is zero or negative.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
