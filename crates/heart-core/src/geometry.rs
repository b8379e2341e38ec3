//! Implicit heart curve `(u² + v² − 1)³ − u²v³ = 0`.
//!
//! Coordinates are normalized around the surface center and divided by the
//! heart scale. In screen space (y down) the curve's lobes point downward,
//! so placement flips accepted points vertically.

use glam::DVec2;

/// Evaluate the implicit heart function at normalized `(u, v)`.
/// Non-positive values lie inside or on the boundary.
#[inline]
pub fn heart_value(u: f64, v: f64) -> f64 {
    let u2 = u * u;
    let r = u2 + v * v - 1.0;
    r * r * r - u2 * v * v * v
}

/// Map a surface point into the curve's normalized space.
#[inline]
pub fn normalize(point: DVec2, scale: f64, width: f64, height: f64) -> DVec2 {
    let center = DVec2::new(width / 2.0, height / 2.0);
    (point - center) / scale
}

/// True iff `(x, y)` lies inside or on the heart of the given scale
/// centered on a `width` x `height` surface.
#[inline]
pub fn is_inside_heart(x: f64, y: f64, scale: f64, width: f64, height: f64) -> bool {
    let n = normalize(DVec2::new(x, y), scale, width, height);
    heart_value(n.x, n.y) <= 0.0
}

/// Fraction of the `width` x `height` box covered by the heart, for
/// placement diagnostics. The curve encloses an area of about 3.67 in
/// normalized units.
pub fn coverage(scale: f64, width: f64, height: f64) -> f64 {
    const NORMALIZED_AREA: f64 = 3.67;
    if width <= 0.0 || height <= 0.0 {
        return 0.0;
    }
    (NORMALIZED_AREA * scale * scale / (width * height)).min(1.0)
}
