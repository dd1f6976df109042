//! Physical constants of the scene and the tunable shading parameters.

use serde::{Deserialize, Serialize};
use spacecam_math::units::{ATMOSPHERE_HEIGHT_KM, AU_KM, EARTH_RADIUS_KM, SOLAR_RADIUS_KM};

/// Fixed geometry of the planet, its atmosphere and the sun. Lengths in km.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConstants {
    /// Planet radius.
    pub planet_radius_km: f64,
    /// Thickness of the atmosphere shell above the surface.
    pub atmosphere_height_km: f64,
    /// Exponential scale height of the scattering density.
    pub scale_height_km: f64,
    /// Physical radius of the sun.
    pub sun_radius_km: f64,
    /// Mean planet-sun distance.
    pub sun_distance_km: f64,
}

impl Default for SceneConstants {
    fn default() -> Self {
        Self {
            planet_radius_km: EARTH_RADIUS_KM,
            atmosphere_height_km: ATMOSPHERE_HEIGHT_KM,
            scale_height_km: 30.0,
            sun_radius_km: SOLAR_RADIUS_KM,
            sun_distance_km: AU_KM,
        }
    }
}

impl SceneConstants {
    /// Radius of the outer atmosphere shell.
    pub fn atmosphere_radius_km(&self) -> f64 {
        self.planet_radius_km + self.atmosphere_height_km
    }

    /// Angular radius of the solar disk in radians.
    pub fn sun_angular_radius(&self) -> f64 {
        (self.sun_radius_km / self.sun_distance_km).atan()
    }
}

/// How the specular highlight direction is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecularModel {
    /// Half-vector between the sun and the viewer.
    #[default]
    BlinnPhong,
    /// Mirror reflection of the sun about the surface normal.
    Phong,
}

/// Every tunable constant used by the shading functions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingParams {
    /// Sun·normal value where the night side ends.
    pub day_edge_low: f64,
    /// Sun·normal value where full daylight begins.
    pub day_edge_high: f64,
    /// Multiplier on cloud opacity.
    pub cloud_boost: f64,
    /// Blue must exceed red and green by this ratio to count as ocean.
    pub ocean_blue_ratio: f64,
    pub specular_model: SpecularModel,
    pub specular_exponent: f64,
    pub specular_strength: f64,
    /// Exponent on view·normal that fades glints at grazing angles.
    pub specular_grazing_power: f64,
    pub rayleigh_strength: f64,
    /// Weight of the shadowed part of the atmosphere path.
    pub night_scatter: f64,
    /// Width of the gaussian limb falloff, in view·normal units.
    pub rim_width: f64,
    pub rim_lit_strength: f64,
    pub rim_dark_strength: f64,
    /// Distance above the surface over which the grazing sky glow fades out.
    pub sky_rim_margin_km: f64,
    /// Inner edge of the sun disk, in sun angular radii.
    pub sun_disk_scale: f64,
    /// Outer edge of the sun halo, in sun angular radii.
    pub sun_glow_scale: f64,
    /// Angular width in radians of the forward-scattering glow.
    pub sun_scatter_width: f64,
    pub sun_scatter_strength: f64,
    /// Final saturation boost, 1.0 leaves colors untouched.
    pub saturation: f64,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            day_edge_low: -0.1,
            day_edge_high: 0.1,
            cloud_boost: 2.0,
            ocean_blue_ratio: 1.05,
            specular_model: SpecularModel::BlinnPhong,
            specular_exponent: 60.0,
            specular_strength: 0.8,
            specular_grazing_power: 0.5,
            rayleigh_strength: 0.15,
            night_scatter: 0.25,
            rim_width: 0.5,
            rim_lit_strength: 0.3,
            rim_dark_strength: 0.15,
            sky_rim_margin_km: 200.0,
            sun_disk_scale: 1.0,
            sun_glow_scale: 4.0,
            sun_scatter_width: 0.35,
            sun_scatter_strength: 0.6,
            saturation: 1.0,
        }
    }
}
