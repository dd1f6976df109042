//! Sun glint on ocean pixels.

use spacecam_math::{Color, Vector3, VectorExt, clip};

use crate::{RayContext, ShadingParams, SpecularModel, Theme};

/// Treat a day color as water when blue dominates both red and green.
pub fn is_ocean(day: Color, ratio: f64) -> bool {
    day.b > ratio * day.r && day.b > ratio * day.g
}

/// Add a sun glint on sunlit ocean pixels. Other pixels pass through unchanged.
pub fn apply_specular_highlight(
    ctx: &RayContext,
    base: Color,
    day: Color,
    theme: &Theme,
    params: &ShadingParams,
) -> Color {
    if !is_ocean(day, params.ocean_blue_ratio) || ctx.sun_light_intensity <= 0.0 {
        return base;
    }

    let alignment = match params.specular_model {
        SpecularModel::BlinnPhong => {
            let half = (ctx.sun_direction - ctx.ray_direction).normalize_or_zero();
            ctx.surface_normal.dot(half)
        }
        SpecularModel::Phong => {
            let reflected: Vector3 = (-ctx.sun_direction).reflect_about(ctx.surface_normal);
            reflected.dot(-ctx.ray_direction)
        }
    };
    if alignment <= 0.0 {
        return base;
    }

    let specular = alignment.powf(params.specular_exponent);
    let falloff = ctx.view_dot_normal.max(0.0).powf(params.specular_grazing_power);
    let reflectivity = clip(day.b, 0.2, 1.0);
    let strength = specular * falloff * reflectivity * params.specular_strength;

    // RGB only; the glint never changes coverage.
    base + theme.glint.with_alpha(0.0) * strength
}
