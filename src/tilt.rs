//! Pointer-to-rotation mapping.
//!
//! [`compute_tilt`] is the whole effect: a linear map from the pointer's
//! offset relative to the container center to a rotation about each axis.
//! It is pure, so it can be tested and benchmarked without a DOM.

use std::fmt;

use glam::Vec2;

use crate::geometry::Rect;

/// Rotation in degrees at full offset from center when nothing else is
/// configured.
pub const DEFAULT_MAX_TILT_DEG: f32 = 10.0;

/// Two-axis orientation applied to a visual, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Rotation about the horizontal axis, driven by vertical offset.
    pub rotate_x: f32,
    /// Rotation about the vertical axis, driven by horizontal offset.
    pub rotate_y: f32,
}

impl Tilt {
    /// No rotation on either axis.
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Create a tilt from the two axis rotations.
    #[must_use]
    pub const fn new(rotate_x: f32, rotate_y: f32) -> Self {
        Self { rotate_x, rotate_y }
    }

    /// Both rotations are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.rotate_x.is_finite() && self.rotate_y.is_finite()
    }

    /// Both rotations are exactly zero.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    /// Render as a CSS `transform` value. The horizontal-axis rotation is
    /// composed first.
    #[must_use]
    pub fn to_css_transform(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tilt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Map a client-space pointer position over `rect` to a tilt.
///
/// `rotate_x = ((y - cy) / cy) * max_tilt` and
/// `rotate_y = ((x - cx) / cx) * -max_tilt`, with `(x, y)` relative to the
/// rectangle and `(cx, cy)` its half size. There is no clamping: a pointer
/// outside the rectangle produces rotations beyond `±max_tilt`.
///
/// A zero-width or zero-height rectangle divides by zero and yields a
/// non-finite component; callers that write to a visual should check
/// [`Tilt::is_finite`].
#[must_use]
pub fn compute_tilt(pointer: Vec2, rect: &Rect, max_tilt: f32) -> Tilt {
    let local = rect.to_local(pointer);
    let center = rect.local_center();
    let offset = (local - center) / center;
    Tilt {
        rotate_x: positive_zero(offset.y * max_tilt),
        rotate_y: positive_zero(offset.x * -max_tilt),
    }
}

/// Fold `-0.0` into `0.0` so a centered pointer renders like
/// [`Tilt::NEUTRAL`]. NaN passes through.
fn positive_zero(deg: f32) -> f32 {
    if deg == 0.0 {
        0.0
    } else {
        deg
    }
}
