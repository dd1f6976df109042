//! Ray intersection with origin-centered spheres (planet and atmosphere shell).

use spacecam_math::Vector3;

use crate::Intersection;

/// Intersect the ray `origin + t * dir` with a sphere of `radius` centered at
/// the frame origin.
///
/// Solves `|origin + t·dir|² = radius²`. Misses when the discriminant is
/// negative or NaN, when `dir` has zero length, or when both roots lie behind
/// the origin. A negative near root is clamped to 0 (origin inside the sphere).
pub fn intersect_sphere_forward(origin: Vector3, dir: Vector3, radius: f64) -> Intersection {
    let a = dir.dot(dir);
    if !(a > 0.0) {
        return Intersection::MISS;
    }
    let b = origin.dot(dir);
    let c = origin.dot(origin) - radius * radius;

    let discriminant = b * b - a * c;
    if !(discriminant >= 0.0) {
        return Intersection::MISS;
    }

    let sqrt_disc = discriminant.sqrt();
    let t_near = (-b - sqrt_disc) / a;
    let t_far = (-b + sqrt_disc) / a;
    Intersection::forward(t_near, t_far)
}
