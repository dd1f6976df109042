//! Per-worker ray state against the planet, atmosphere and shadow.

use spacecam_geometry::{Intersection, intersect_half_cylinder_forward, intersect_sphere_forward};
use spacecam_math::Vector3;

use crate::SceneConstants;

/// Geometry of one camera ray against the planet, its atmosphere and its shadow.
///
/// Each render worker owns one context. The scene-fixed fields are set once in
/// [`RayContext::new`]; every other field is overwritten by
/// [`RayContext::set_ray_direction`] and depends only on the origin, the sun
/// direction and the ray direction.
#[derive(Clone, Debug, PartialEq)]
pub struct RayContext {
    pub origin: Vector3,
    /// Unit vector toward the sun.
    pub sun_direction: Vector3,
    pub altitude_km: f64,
    pub scene: SceneConstants,

    pub ray_direction: Vector3,
    pub hit_earth: bool,
    /// Distance to the surface hit, -1 on a miss.
    pub t_earth: f64,
    pub hit_point: Vector3,
    /// Unit surface normal at the hit point, zero on a miss.
    pub surface_normal: Vector3,
    /// `-normal·dir`: 1 looking straight down, 0 at the limb.
    pub view_dot_normal: f64,
    /// `normal·sun`: positive on the day side.
    pub sun_light_intensity: f64,
    /// Distance from the planet center to the closest point of the ray line.
    pub closest_distance: f64,
    /// Cosine between the closest-approach direction and the sun.
    pub rim_light_factor: f64,
    /// Path through the atmosphere shell, cut off at the surface.
    pub atmosphere: Intersection,
    /// Path through the planet's shadow, cut off at the surface.
    pub shadow: Intersection,
}

impl RayContext {
    pub fn new(origin: Vector3, sun_direction: Vector3, scene: &SceneConstants) -> Self {
        Self {
            origin,
            sun_direction: sun_direction.normalize_or_zero(),
            altitude_km: origin.length() - scene.planet_radius_km,
            scene: *scene,
            ray_direction: Vector3::ZERO,
            hit_earth: false,
            t_earth: -1.0,
            hit_point: Vector3::ZERO,
            surface_normal: Vector3::ZERO,
            view_dot_normal: 0.0,
            sun_light_intensity: 0.0,
            closest_distance: 0.0,
            rim_light_factor: 0.0,
            atmosphere: Intersection::MISS,
            shadow: Intersection::MISS,
        }
    }

    /// Recompute every per-ray field for the unit direction `dir`.
    pub fn set_ray_direction(&mut self, dir: Vector3) {
        self.ray_direction = dir;

        let earth = intersect_sphere_forward(self.origin, dir, self.scene.planet_radius_km);
        self.hit_earth = earth.hit;
        if earth.hit {
            self.t_earth = earth.t_near;
            self.hit_point = self.origin + dir * earth.t_near;
            self.surface_normal = self.hit_point.normalize_or_zero();
            self.view_dot_normal = -self.surface_normal.dot(dir);
            self.sun_light_intensity = self.surface_normal.dot(self.sun_direction);
        } else {
            self.t_earth = -1.0;
            self.hit_point = Vector3::ZERO;
            self.surface_normal = Vector3::ZERO;
            self.view_dot_normal = 0.0;
            self.sun_light_intensity = 0.0;
        }

        let closest = self.origin - dir * self.origin.dot(dir);
        self.closest_distance = closest.length();
        self.rim_light_factor = closest.normalize_or_zero().dot(self.sun_direction);

        let mut atmosphere =
            intersect_sphere_forward(self.origin, dir, self.scene.atmosphere_radius_km());
        let mut shadow = intersect_half_cylinder_forward(
            self.origin,
            dir,
            -self.sun_direction,
            self.scene.planet_radius_km,
        );
        if earth.hit {
            atmosphere = atmosphere.clamp_far(self.t_earth);
            shadow = shadow.clamp_far(self.t_earth);
        }
        self.atmosphere = atmosphere;
        self.shadow = shadow;
    }
}
