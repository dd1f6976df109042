//! Overlap area of two circles, used for partial eclipses of the sun.

use std::f64::consts::PI;

/// Area of the lens where two circles overlap.
///
/// `r1` and `r2` are the radii and `distance` the separation of the centers,
/// all in the same (angular or linear) unit. Returns 0 when the circles are
/// disjoint and the smaller circle's area when one contains the other.
pub fn circle_overlap_area(r1: f64, r2: f64, distance: f64) -> f64 {
    if !(r1 > 0.0) || !(r2 > 0.0) {
        return 0.0;
    }
    let d = distance.abs();
    if d >= r1 + r2 {
        return 0.0;
    }
    if d <= (r1 - r2).abs() {
        let r = r1.min(r2);
        return PI * r * r;
    }

    let cos1 = ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1)).clamp(-1.0, 1.0);
    let cos2 = ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2)).clamp(-1.0, 1.0);
    let kite = (-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2);

    r1 * r1 * cos1.acos() + r2 * r2 * cos2.acos() - 0.5 * kite.max(0.0).sqrt()
}
