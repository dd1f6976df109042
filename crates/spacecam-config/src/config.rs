//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spacecam_render::{RenderOptions, SceneConstants, ShadingParams, Theme};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Directory holding `config.ron` when `--config` is not given.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("spacecam"))
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Camera placement.
    pub camera: CameraConfig,
    /// Image size and sampling.
    pub render: RenderConfig,
    /// Output file settings.
    pub output: OutputConfig,
    /// Where texture files are looked up.
    pub textures: TextureConfig,
    /// Colors and texture ids.
    pub theme: Theme,
    /// Shading tunables.
    pub shading: ShadingParams,
    /// Planet and sun geometry.
    pub scene: SceneConstants,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Geodetic latitude in degrees.
    pub lat_deg: f64,
    /// Longitude in degrees, east positive.
    pub lon_deg: f64,
    /// Altitude above the surface in km.
    pub altitude_km: f64,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// Pitch about the camera's right axis in degrees.
    pub tilt_deg: f64,
    /// Heading about the local vertical in degrees.
    pub yaw_deg: f64,
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width and height in pixels.
    pub size: u32,
    /// Samples per pixel along each axis.
    pub supersampling: u32,
    /// Worker threads (0 = one per logical CPU).
    pub workers: usize,
    /// Render a 2x2 mosaic of views 90° of longitude apart.
    pub panoramic: bool,
}

/// PNG compression effort.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PngCompression {
    #[default]
    Fast,
    Balanced,
    Best,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// PNG file to write.
    pub path: PathBuf,
    pub compression: PngCompression,
}

/// Texture lookup configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    /// Directory that relative texture ids resolve under. Unset means the
    /// working directory.
    pub root: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            lat_deg: 0.0,
            lon_deg: 120.0,
            altitude_km: 8880.0,
            fov_deg: 60.0,
            tilt_deg: 0.0,
            yaw_deg: 0.0,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            supersampling: 3,
            workers: 0,
            panoramic: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("earth_view.png"),
            compression: PngCompression::Fast,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl RenderConfig {
    /// Options for rendering one square image of `size` pixels.
    pub fn options(&self, size: u32) -> RenderOptions {
        RenderOptions {
            width: size,
            height: size,
            supersampling: self.supersampling,
            workers: self.workers,
        }
    }
}

// --- Validation ---

impl Config {
    /// Reject settings the renderer cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        if self.render.size == 0 {
            return invalid("render.size must be at least 1".into());
        }
        if self.render.supersampling == 0 {
            return invalid("render.supersampling must be at least 1".into());
        }
        if self.render.panoramic && self.render.size % 2 != 0 {
            return invalid(format!(
                "render.size must be even for panoramic rendering, got {}",
                self.render.size
            ));
        }
        if !(self.camera.fov_deg > 0.0 && self.camera.fov_deg < 180.0) {
            return invalid(format!(
                "camera.fov_deg must be in (0, 180), got {}",
                self.camera.fov_deg
            ));
        }
        if !(self.camera.altitude_km > 0.0) {
            return invalid(format!(
                "camera.altitude_km must be positive, got {}",
                self.camera.altitude_km
            ));
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Re-read the file: `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = std::fs::read_to_string(config_dir.join(CONFIG_FILE))
            .map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let ron_str =
            ron::ser::to_string_pretty(&Config::default(), ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("altitude_km: 8880.0"));
        assert!(ron_str.contains("supersampling: 3"));
        assert!(ron_str.contains("rayleigh_strength: 0.15"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.textures.root = Some(PathBuf::from("/srv/maps"));
        config.output.compression = PngCompression::Best;
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = ron::from_str("(camera: (lon_deg: -60.0), render: (size: 640))").unwrap();
        assert_eq!(config.camera.lon_deg, -60.0);
        assert_eq!(config.camera.altitude_km, 8880.0);
        assert_eq!(config.render.size, 640);
        assert_eq!(config.shading, ShadingParams::default());
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.camera.lat_deg = 45.5;
        config.render.panoramic = false;
        config.theme.day_texture = "maps/day.tif".into();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("spacecam");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());

        let mut modified = config.clone();
        modified.render.size = 2048;
        modified.save(dir.path()).unwrap();
        let reloaded = config.reload(dir.path()).unwrap().unwrap();
        assert_eq!(reloaded.render.size, 2048);
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut odd = Config::default();
        odd.render.size = 641;
        assert!(matches!(odd.validate(), Err(ConfigError::Invalid(_))));
        odd.render.panoramic = false;
        assert!(odd.validate().is_ok());

        let mut no_samples = Config::default();
        no_samples.render.supersampling = 0;
        assert!(no_samples.validate().is_err());

        let mut wide = Config::default();
        wide.camera.fov_deg = 180.0;
        assert!(wide.validate().is_err());

        let mut buried = Config::default();
        buried.camera.altitude_km = -5.0;
        assert!(buried.validate().is_err());
    }

    #[test]
    fn test_render_options() {
        let render = RenderConfig {
            workers: 3,
            ..RenderConfig::default()
        };
        let options = render.options(512);
        assert_eq!((options.width, options.height), (512, 512));
        assert_eq!(options.supersampling, 3);
        assert_eq!(options.workers, 3);
    }
}
