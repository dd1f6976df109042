//! Single-pass atmospheric scattering along the view ray.

use spacecam_math::{Color, clip, smoothstep};

use crate::{RayContext, ShadingParams, Theme};

/// Blend the scattering tint of the ray's path through the atmosphere over `base`.
///
/// Returns `base` unchanged when the ray misses the shell. The shadowed part
/// of the path scatters with weight `night_scatter` and pulls the tint toward
/// `night_rim`.
pub fn apply_atmosphere(ctx: &RayContext, base: Color, theme: &Theme, params: &ShadingParams) -> Color {
    if !ctx.atmosphere.hit {
        return base;
    }

    let total = ctx.atmosphere.length();
    let unlit = ctx.atmosphere.overlap(&ctx.shadow).min(total);
    let lit = (total - unlit).max(0.0);
    let path = lit + unlit;
    if !(path > 0.0) {
        if ctx.hit_earth {
            return base;
        }
        return base + sky_rim_glow(ctx, theme, params);
    }

    let midpoint = ctx.origin + ctx.ray_direction * ctx.atmosphere.midpoint();
    let height = (midpoint.length() - ctx.scene.planet_radius_km).max(0.0);
    let density = (-height / ctx.scene.scale_height_km).exp();
    let amount = clip(params.rayleigh_strength * density * path.ln().max(0.0), 0.0, 1.0);

    let limb = if ctx.hit_earth {
        1.0 - ctx.view_dot_normal.abs()
    } else {
        1.0
    };
    let tint = theme
        .day_rim
        .mix(theme.outer_rim, limb)
        .mix(theme.night_rim, unlit / path);
    let lit_amount = amount * (lit + params.night_scatter * unlit) / path;

    base.mix(tint, lit_amount)
}

/// Additive glow for rays that just graze the top of the atmosphere.
pub fn sky_rim_glow(ctx: &RayContext, theme: &Theme, params: &ShadingParams) -> Color {
    let radius = ctx.scene.planet_radius_km;
    let edge = smoothstep(radius + params.sky_rim_margin_km, radius, ctx.closest_distance);
    if edge <= 0.0 {
        return Color::TRANSPARENT;
    }
    let lit = smoothstep(0.0, 0.5, ctx.rim_light_factor);
    let dark = smoothstep(-0.5, -0.2, -ctx.rim_light_factor);
    theme.sky_rim * (edge * (0.9 * lit + 0.3 * dark))
}
