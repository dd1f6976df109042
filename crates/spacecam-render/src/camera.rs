//! Pinhole camera placed above the planet and looking down at its center.

use spacecam_math::{Vector3, VectorExt};

use crate::SceneConstants;

/// Pinhole camera in the planet-fixed frame.
///
/// `forward`, `right` and `up` form an orthonormal basis. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// `tan(fov / 2)`.
    pub tan_half_fov: f64,
    /// Camera position in km.
    pub position: Vector3,
    pub forward: Vector3,
    pub right: Vector3,
    pub up: Vector3,
    /// Scene the camera was placed in.
    pub scene: SceneConstants,
}

impl Camera {
    /// Place a camera at geodetic `lat_deg`/`lon_deg`, `alt_km` above the
    /// surface, looking at the planet center.
    ///
    /// `yaw_deg` turns the view about the local vertical, `tilt_deg` then
    /// pitches it about the camera's right axis (positive tilts toward `up`).
    pub fn new(
        lat_deg: f64,
        lon_deg: f64,
        alt_km: f64,
        fov_deg: f64,
        tilt_deg: f64,
        yaw_deg: f64,
        scene: &SceneConstants,
    ) -> Self {
        let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
        let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
        let radius = scene.planet_radius_km + alt_km;
        let position = Vector3::new(
            radius * cos_lat * cos_lon,
            radius * cos_lat * sin_lon,
            radius * sin_lat,
        );

        let forward = -position.normalize_or_zero();
        let mut right = forward.cross(Vector3::Z);
        if right.length() < 1e-6 {
            // Looking straight along the polar axis.
            right = Vector3::X;
        }
        let right = right.normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();

        let mut basis = Basis { forward, right, up };
        basis.pitch(90.0);
        if yaw_deg != 0.0 {
            basis.yaw(yaw_deg);
        }
        basis.pitch(-90.0);
        if tilt_deg != 0.0 {
            basis.pitch(tilt_deg);
        }

        Self {
            fov_deg,
            tan_half_fov: (fov_deg.to_radians() / 2.0).tan(),
            position,
            forward: basis.forward,
            right: basis.right,
            up: basis.up,
            scene: *scene,
        }
    }

    /// Altitude above the planet surface in km.
    pub fn altitude_km(&self) -> f64 {
        self.position.length() - self.scene.planet_radius_km
    }

    /// Unit view direction through the (possibly fractional) pixel `(px, py)`
    /// of a `width`×`height` image. Pixel rows grow downward.
    pub fn compute_ray(&self, px: f64, py: f64, width: u32, height: u32) -> Vector3 {
        let w = f64::from(width);
        let h = f64::from(height);
        let x_ndc = ndc(px, w);
        let y_ndc = -ndc(py, h);

        let aspect = if h > 0.0 { w / h } else { 1.0 };
        let x_plane = x_ndc * self.tan_half_fov * aspect;
        let y_plane = y_ndc * self.tan_half_fov;

        (self.right * x_plane + self.up * y_plane + self.forward).normalize_or_zero()
    }
}

/// Map a pixel coordinate to `[-1, 1]` across an axis of `extent` pixels.
fn ndc(p: f64, extent: f64) -> f64 {
    let half = (extent - 1.0) / 2.0;
    if half <= 0.0 { 0.0 } else { (p - half) / half }
}

struct Basis {
    forward: Vector3,
    right: Vector3,
    up: Vector3,
}

impl Basis {
    /// Rotate forward and up about right.
    fn pitch(&mut self, degrees: f64) {
        self.forward = self
            .forward
            .rotate_about_degrees(self.right, degrees)
            .normalize_or_zero();
        self.up = self
            .up
            .rotate_about_degrees(self.right, degrees)
            .normalize_or_zero();
    }

    /// Rotate forward and right about up.
    fn yaw(&mut self, degrees: f64) {
        self.forward = self
            .forward
            .rotate_about_degrees(self.up, degrees)
            .normalize_or_zero();
        self.right = self
            .right
            .rotate_about_degrees(self.up, degrees)
            .normalize_or_zero();
    }
}
