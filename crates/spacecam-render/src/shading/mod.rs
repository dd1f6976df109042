//! Per-sample shading: pure functions of a [`RayContext`], texture samples,
//! the [`Theme`] and the [`ShadingParams`].

mod atmosphere;
mod specular;
mod sun;
mod surface;

pub use atmosphere::{apply_atmosphere, sky_rim_glow};
pub use specular::{apply_specular_highlight, is_ocean};
pub use sun::{apply_solar_disk, sun_visible_fraction};
pub use surface::{apply_rim_glow, blend_clouds, blend_night_day, daylight};

use spacecam_math::Color;

use crate::{RayContext, ShadingParams, SurfaceSamples, SurfaceTextures, Theme};

/// Surface color at the hit point: day/night blend, clouds, glint, limb glow.
pub fn shade_surface(
    ctx: &RayContext,
    samples: &SurfaceSamples,
    theme: &Theme,
    params: &ShadingParams,
) -> Color {
    let light = daylight(ctx, params);
    let mut color = blend_night_day(samples.night, samples.day, light);
    color = blend_clouds(color, samples.clouds, light, params.cloud_boost);
    color = apply_specular_highlight(ctx, color, samples.day, theme, params);
    apply_rim_glow(ctx, color, theme, params)
}

/// Full color of one sample ray. `ctx` must already hold the ray direction.
pub fn shade_ray(
    ctx: &RayContext,
    textures: &SurfaceTextures,
    theme: &Theme,
    params: &ShadingParams,
    sun_visible_fraction: f64,
) -> Color {
    let mut color = if ctx.hit_earth {
        let samples = textures.sample(ctx.surface_normal);
        shade_surface(ctx, &samples, theme, params)
    } else {
        Color::TRANSPARENT
    };
    color = apply_atmosphere(ctx, color, theme, params);
    apply_solar_disk(ctx, color, theme, params, sun_visible_fraction)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use spacecam_math::Vector3;

    use super::*;
    use crate::{ConstantTexture, SceneConstants};

    fn textures() -> SurfaceTextures {
        SurfaceTextures {
            day: Arc::new(ConstantTexture(Color::new(0.3, 0.5, 0.2, 1.0))),
            night: Arc::new(ConstantTexture(Color::new(0.05, 0.04, 0.01, 1.0))),
            clouds: Arc::new(ConstantTexture(Color::TRANSPARENT)),
        }
    }

    fn context(sun: Vector3, dir: Vector3) -> RayContext {
        let mut ctx = RayContext::new(
            Vector3::new(6371.0 + 8800.0, 0.0, 0.0),
            sun,
            &SceneConstants::default(),
        );
        ctx.set_ray_direction(dir);
        ctx
    }

    #[test]
    fn test_deep_space_is_transparent() {
        let ctx = context(Vector3::X, Vector3::Z);
        let color = shade_ray(&ctx, &textures(), &Theme::default(), &ShadingParams::default(), 1.0);
        assert_eq!(color, Color::TRANSPARENT);
    }

    #[test]
    fn test_day_surface_is_opaque_and_bright() {
        let ctx = context(Vector3::X, -Vector3::X);
        let day = shade_ray(&ctx, &textures(), &Theme::default(), &ShadingParams::default(), 1.0);
        let ctx = context(-Vector3::X, -Vector3::X);
        let night = shade_ray(&ctx, &textures(), &Theme::default(), &ShadingParams::default(), 0.0);
        assert!(day.a > 0.9);
        assert!(day.brightness() > night.brightness());
    }

    #[test]
    fn test_surface_pipeline_without_clouds() {
        let ctx = context(Vector3::X, -Vector3::X);
        let samples = textures().sample(ctx.surface_normal);
        let params = ShadingParams::default();
        let theme = Theme::default();
        let color = shade_surface(&ctx, &samples, &theme, &params);
        // Land in full sun: the day color plus a faint limb term.
        let rim = apply_rim_glow(&ctx, samples.day.with_alpha(1.0), &theme, &params);
        assert!((color.g - rim.g).abs() < 1e-12);
    }
}
