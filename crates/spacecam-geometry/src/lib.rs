//! Closed-form ray intersection routines for the spherical planet model.
//!
//! Every routine is pure and allocation free. Degenerate inputs (negative or
//! NaN discriminants, zero-length directions, rays parallel to an axis) are
//! reported as [`Intersection::MISS`], never as errors or panics.

mod circle;
mod cylinder;
mod intersection;
mod sphere;

pub use circle::circle_overlap_area;
pub use cylinder::intersect_half_cylinder_forward;
pub use intersection::Intersection;
pub use sphere::intersect_sphere_forward;
