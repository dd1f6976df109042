//! Colors and texture ids of a rendering style.

use serde::{Deserialize, Serialize};
use spacecam_math::Color;

/// Named colors and texture identifiers for one rendering style.
///
/// Built once per render and shared read-only by every worker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Scattering tint looking straight down through a sunlit atmosphere.
    pub day_rim: Color,
    /// Scattering tint toward the limb.
    pub outer_rim: Color,
    /// Scattering tint inside the planet's shadow.
    pub night_rim: Color,
    /// Glow of rays that only graze the atmosphere.
    pub sky_rim: Color,
    /// Limb glow added on the surface.
    pub surface_rim: Color,
    /// Final output tint.
    pub warm: Color,
    /// Color of specular glints on water.
    pub glint: Color,
    pub sun_disk: Color,
    pub sun_glow: Color,
    /// Texture id of the daylight surface.
    pub day_texture: String,
    /// Texture id of the city lights.
    pub night_texture: String,
    /// Texture id of the cloud cover.
    pub cloud_texture: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            day_rim: Color::new(0.25, 0.6, 1.0, 0.5),
            outer_rim: Color::new(0.45, 0.7, 1.0, 0.6),
            night_rim: Color::new(0.15, 0.07, 0.2, 0.5),
            sky_rim: Color::new(0.3, 0.55, 1.0, 1.0),
            surface_rim: Color::new(0.3, 0.55, 1.0, 0.5),
            warm: Color::new(1.02, 1.0, 0.98, 1.0),
            glint: Color::new(1.0, 0.97, 0.9, 1.0),
            sun_disk: Color::new(1.0, 0.98, 0.92, 1.0),
            sun_glow: Color::new(1.0, 0.6, 0.3, 1.0),
            day_texture: "assets/world.200408.jpg".into(),
            night_texture: "assets/night.jpg".into(),
            cloud_texture: "assets/cloud.2001210.jpg".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_texture_override() {
        let theme: Theme = ron::from_str(r#"(day_texture: "blue_marble.png")"#).expect("parse");
        assert_eq!(theme.day_texture, "blue_marble.png");
        assert_eq!(theme.night_texture, Theme::default().night_texture);
        assert_eq!(theme.warm, Theme::default().warm);
    }
}
