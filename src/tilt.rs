//! Parallax tilt for the avatar card.
//!
//! Pointer offset from the card center maps linearly onto a rotation: the
//! card edge produces half of `max_deg`, and the result is clamped to
//! `±max_deg` so pointers reported outside the box cannot over-rotate it.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

/// A point in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box in client coordinates, as from `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Rotation around the X and Y axes, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Compute the tilt for a pointer over `rect`.
///
/// Moving down tilts the top edge away (negative X rotation); moving right
/// turns the card right (positive Y rotation). Zero-sized boxes never tilt.
#[must_use]
pub fn tilt_for(pointer: Point, rect: Rect, max_deg: f64) -> Tilt {
    let center = rect.center();
    let dx = pointer.x - center.x;
    let dy = pointer.y - center.y;
    Tilt {
        rotate_x: axis_rotation(-dy, rect.height, max_deg),
        rotate_y: axis_rotation(dx, rect.width, max_deg),
    }
}

fn axis_rotation(offset: f64, extent: f64, max_deg: f64) -> f64 {
    if extent <= f64::EPSILON || !offset.is_finite() {
        return 0.0;
    }
    // Adding +0.0 folds -0.0 so the transform never reads "-0deg".
    (offset / extent * max_deg).clamp(-max_deg, max_deg) + 0.0
}

/// CSS `transform` value for a tilted card.
#[must_use]
pub fn transform_css(tilt: Tilt, perspective_px: f64, lift_px: f64) -> String {
    format!(
        "perspective({perspective_px}px) rotateX({}deg) rotateY({}deg) translateZ({lift_px}px)",
        tilt.rotate_x, tilt.rotate_y
    )
}
