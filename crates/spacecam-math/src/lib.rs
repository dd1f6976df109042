//! Vector, color, and scalar primitives shared by every spacecam crate.
//!
//! Vectors are double precision (`glam::DVec3`) and live in the planet-centered,
//! planet-fixed frame with kilometers as the unit of length. Colors are linear
//! RGBA and stay unclamped until the final 8-bit conversion.

mod color;
mod scalar;
pub mod units;
mod vector;

pub use color::Color;
pub use scalar::{clip, gaussian_fade, smoothstep};
pub use vector::{Vector3, VectorExt};
