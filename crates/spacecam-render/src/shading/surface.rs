//! Day/night blend, cloud overlay and limb glow of the planet surface.

use spacecam_math::{Color, gaussian_fade, smoothstep};

use crate::{RayContext, ShadingParams, Theme};

/// Fraction of full daylight at the hit point, 0 on the night side.
pub fn daylight(ctx: &RayContext, params: &ShadingParams) -> f64 {
    smoothstep(
        params.day_edge_low,
        params.day_edge_high,
        ctx.sun_light_intensity,
    )
}

/// Energy-preserving blend: each channel is `sqrt((1-l)·night² + l·day²)`.
pub fn blend_night_day(night: Color, day: Color, light: f64) -> Color {
    let channel = |n: f64, d: f64| ((1.0 - light) * n * n + light * d * d).sqrt();
    Color::new(
        channel(night.r, day.r),
        channel(night.g, day.g),
        channel(night.b, day.b),
        1.0,
    )
}

/// Lighten `base` toward white where the cloud layer is bright and sunlit.
pub fn blend_clouds(base: Color, clouds: Color, light: f64, boost: f64) -> Color {
    let alpha = clouds.brightness() * light * boost;
    let channel = |c: f64, cloud: f64| c + (1.0 - c) * cloud * alpha;
    Color::new(
        channel(base.r, clouds.r),
        channel(base.g, clouds.g),
        channel(base.b, clouds.b),
        base.a,
    )
}

/// Limb glow on the surface, with a weaker Earthshine term deep on the night side.
pub fn apply_rim_glow(ctx: &RayContext, base: Color, theme: &Theme, params: &ShadingParams) -> Color {
    let edge = gaussian_fade(ctx.view_dot_normal, 0.0, params.rim_width);
    let lit = smoothstep(-0.2, 0.1, ctx.sun_light_intensity) * params.rim_lit_strength;
    let dark = smoothstep(0.3, 0.7, -ctx.sun_light_intensity) * params.rim_dark_strength;
    base + theme.surface_rim * (edge * lit + edge * dark)
}
