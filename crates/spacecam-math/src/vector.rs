//! Double-precision 3D vectors in the planet-centered frame.

/// Planet-centered, planet-fixed 3D vector (km for positions, unitless for directions).
///
/// `glam::DVec3` already provides add/sub/scale, `dot`, `cross`, `length` and
/// `normalize_or_zero`, which returns the zero vector for zero-length (or
/// non-finite) input instead of producing NaNs.
pub type Vector3 = glam::DVec3;

/// Operations the renderer needs beyond what `glam` provides.
pub trait VectorExt {
    /// Mirror `self` about the plane whose unit normal is `normal`:
    /// `v - 2 (v·n) n`.
    fn reflect_about(self, normal: Vector3) -> Vector3;

    /// Rodrigues rotation of `self` about the unit `axis` by the angle whose
    /// cosine and sine are given.
    fn rotate_about(self, axis: Vector3, cos_theta: f64, sin_theta: f64) -> Vector3;

    /// Rodrigues rotation of `self` about the unit `axis` by `degrees`.
    fn rotate_about_degrees(self, axis: Vector3, degrees: f64) -> Vector3;
}

impl VectorExt for Vector3 {
    fn reflect_about(self, normal: Vector3) -> Vector3 {
        self - normal * (2.0 * self.dot(normal))
    }

    fn rotate_about(self, axis: Vector3, cos_theta: f64, sin_theta: f64) -> Vector3 {
        // v cosθ + (k × v) sinθ + k (k·v)(1 − cosθ)
        self * cos_theta
            + axis.cross(self) * sin_theta
            + axis * (axis.dot(self) * (1.0 - cos_theta))
    }

    fn rotate_about_degrees(self, axis: Vector3, degrees: f64) -> Vector3 {
        let (sin_theta, cos_theta) = degrees.to_radians().sin_cos();
        self.rotate_about(axis, cos_theta, sin_theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vector3, b: Vector3) {
        assert!((a - b).length() < 1e-12, "{a:?} != {b:?}");
    }

    #[test]
    fn test_normalize_zero_length_returns_zero() {
        assert_eq!(Vector3::ZERO.normalize_or_zero(), Vector3::ZERO);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vector3::new(3.0, -4.0, 12.0).normalize_or_zero();
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_right_handed() {
        assert_close(Vector3::X.cross(Vector3::Y), Vector3::Z);
    }

    #[test]
    fn test_reflect_about_plane() {
        let incoming = Vector3::new(1.0, -1.0, 0.0);
        assert_close(incoming.reflect_about(Vector3::Y), Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let v = Vector3::new(0.3, -2.0, 0.7);
        let n = Vector3::new(1.0, 1.0, 1.0).normalize_or_zero();
        assert!((v.reflect_about(n).length() - v.length()).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_quarter_turn_about_z() {
        assert_close(Vector3::X.rotate_about_degrees(Vector3::Z, 90.0), Vector3::Y);
    }

    #[test]
    fn test_rotate_leaves_axis_component_untouched() {
        let v = Vector3::new(0.2, 0.5, 3.0);
        let r = v.rotate_about_degrees(Vector3::Z, 37.0);
        assert!((r.z - v.z).abs() < 1e-12);
        assert!((r.length() - v.length()).abs() < 1e-12);
    }
}
