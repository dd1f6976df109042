//! Scalar easing and falloff helpers.

/// Cubic Hermite interpolation from 0 to 1 across `[edge0, edge1]`.
///
/// Reversed edges (`edge0 > edge1`) produce a falling curve. Equal edges
/// degenerate to a step: 0 below the edge, 1 at or above it.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Clamp `x` into the inclusive range `[min, max]`.
pub fn clip(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Gaussian falloff `exp(-((x - center) / width)²)`. Peaks at 1 when `x == center`.
pub fn gaussian_fade(x: f64, center: f64, width: f64) -> f64 {
    let u = (x - center) / width;
    (-u * u).exp()
}
