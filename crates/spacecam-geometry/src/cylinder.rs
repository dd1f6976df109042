//! Ray intersection with the planet's half-infinite shadow cylinder.

use spacecam_math::Vector3;

use crate::Intersection;

/// Intersect the ray `origin + t * dir` with the half-infinite cylinder of
/// `radius` whose axis runs from the frame origin along `axis`.
///
/// Models the planet's shadow: pass `axis = -sun_direction`. Only points `p`
/// with `p·axis >= 0` belong to the shadow, so the cylinder interval is
/// intersected with that half-space. A ray parallel to the axis is a miss.
pub fn intersect_half_cylinder_forward(
    origin: Vector3,
    dir: Vector3,
    axis: Vector3,
    radius: f64,
) -> Intersection {
    let axis = axis.normalize_or_zero();
    if axis == Vector3::ZERO {
        return Intersection::MISS;
    }

    let origin_axial = origin.dot(axis);
    let dir_axial = dir.dot(axis);
    let origin_perp = origin - axis * origin_axial;
    let dir_perp = dir - axis * dir_axial;

    let a = dir_perp.dot(dir_perp);
    if !(a > 0.0) {
        return Intersection::MISS;
    }
    let b = origin_perp.dot(dir_perp);
    let c = origin_perp.dot(origin_perp) - radius * radius;

    let discriminant = b * b - a * c;
    if !(discriminant >= 0.0) {
        return Intersection::MISS;
    }

    let sqrt_disc = discriminant.sqrt();
    let mut t_near = (-b - sqrt_disc) / a;
    let mut t_far = (-b + sqrt_disc) / a;

    // Keep only the part on the anti-sun side of the terminator plane.
    if dir_axial > 0.0 {
        t_near = t_near.max(-origin_axial / dir_axial);
    } else if dir_axial < 0.0 {
        t_far = t_far.min(-origin_axial / dir_axial);
    } else if origin_axial < 0.0 {
        return Intersection::MISS;
    }

    Intersection::forward(t_near, t_far)
}
