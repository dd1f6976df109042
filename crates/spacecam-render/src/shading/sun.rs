//! Solar disk, its forward-scatter glow and eclipse by the planet.

use std::f64::consts::PI;

use spacecam_geometry::circle_overlap_area;
use spacecam_math::{Color, Vector3, gaussian_fade, smoothstep};

use crate::{RayContext, SceneConstants, ShadingParams, Theme};

/// Fraction of the solar disk not hidden behind the planet, seen from `camera_position`.
///
/// Computed once per frame from the apparent disks of the sun and the planet.
pub fn sun_visible_fraction(
    camera_position: Vector3,
    sun_direction: Vector3,
    scene: &SceneConstants,
) -> f64 {
    let distance = camera_position.length();
    if !(distance > 0.0) {
        return 0.0;
    }
    let planet_radius = (scene.planet_radius_km / distance).min(1.0).asin();
    let sun_radius = scene.sun_angular_radius();

    let to_center = -camera_position / distance;
    let separation = to_center
        .dot(sun_direction.normalize_or_zero())
        .clamp(-1.0, 1.0)
        .acos();

    let hidden = circle_overlap_area(sun_radius, planet_radius, separation);
    (1.0 - hidden / (PI * sun_radius * sun_radius)).clamp(0.0, 1.0)
}

/// Forward-scattering glow around the sun, then the solar disk itself.
///
/// The disk is only drawn for rays that miss the planet and fades with the
/// visible fraction of the sun.
pub fn apply_solar_disk(
    ctx: &RayContext,
    base: Color,
    theme: &Theme,
    params: &ShadingParams,
    visible_fraction: f64,
) -> Color {
    let angle = ctx.ray_direction.dot(ctx.sun_direction).clamp(-1.0, 1.0).acos();
    let mut color = base;

    if ctx.atmosphere.length() > 0.0 {
        let limb = if ctx.hit_earth {
            gaussian_fade(ctx.view_dot_normal, 0.0, params.rim_width)
        } else {
            1.0
        };
        let glow = gaussian_fade(angle, 0.0, params.sun_scatter_width)
            * params.sun_scatter_strength
            * limb;
        color += theme.sun_glow * glow;
    }

    if ctx.hit_earth {
        return color;
    }

    let sun_radius = ctx.scene.sun_angular_radius();
    let inner = params.sun_disk_scale * sun_radius;
    let outer = params.sun_glow_scale * sun_radius;
    let s = smoothstep(outer, inner, angle);
    let intensity = s * s * visible_fraction;
    if intensity > 0.0 {
        color.mix(theme.sun_disk, intensity)
    } else {
        color
    }
}
