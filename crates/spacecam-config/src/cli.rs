//! Command-line argument parsing for spacecam.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Render a view of the Earth from orbit.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "spacecam", about = "Satellite view generator")]
pub struct CliArgs {
    /// Camera latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Camera longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Camera altitude in kilometers.
    #[arg(long)]
    pub alt: Option<f64>,

    /// Vertical field of view in degrees.
    #[arg(long)]
    pub fov: Option<f64>,

    /// Camera tilt in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub tilt: Option<f64>,

    /// Camera yaw in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub yaw: Option<f64>,

    /// Output image size (width and height in pixels).
    #[arg(long)]
    pub size: Option<u32>,

    /// Supersampling factor (higher is slower but smoother).
    #[arg(long)]
    pub supersample: Option<u32>,

    /// Render time in RFC 3339 format, e.g. 2025-08-02T15:04:05Z. Defaults to now.
    #[arg(long)]
    pub time: Option<String>,

    /// Output PNG file path.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Day texture path.
    #[arg(long)]
    pub day: Option<String>,

    /// Night texture path.
    #[arg(long)]
    pub night: Option<String>,

    /// Clouds texture path.
    #[arg(long)]
    pub clouds: Option<String>,

    /// Render a 2x2 panoramic view, 90° of longitude apart.
    #[arg(long)]
    pub panoramic: Option<bool>,

    /// Worker threads (0 = one per CPU).
    #[arg(long)]
    pub workers: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(lat) = args.lat {
            self.camera.lat_deg = lat;
        }
        if let Some(lon) = args.lon {
            self.camera.lon_deg = lon;
        }
        if let Some(alt) = args.alt {
            self.camera.altitude_km = alt;
        }
        if let Some(fov) = args.fov {
            self.camera.fov_deg = fov;
        }
        if let Some(tilt) = args.tilt {
            self.camera.tilt_deg = tilt;
        }
        if let Some(yaw) = args.yaw {
            self.camera.yaw_deg = yaw;
        }
        if let Some(size) = args.size {
            self.render.size = size;
        }
        if let Some(n) = args.supersample {
            self.render.supersampling = n;
        }
        if let Some(panoramic) = args.panoramic {
            self.render.panoramic = panoramic;
        }
        if let Some(workers) = args.workers {
            self.render.workers = workers;
        }
        if let Some(ref out) = args.out {
            self.output.path = out.clone();
        }
        if let Some(ref day) = args.day {
            self.theme.day_texture = day.clone();
        }
        if let Some(ref night) = args.night {
            self.theme.night_texture = night.clone();
        }
        if let Some(ref clouds) = args.clouds {
            self.theme.cloud_texture = clouds.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            lon: Some(-60.0),
            alt: Some(8800.0),
            size: Some(640),
            panoramic: Some(false),
            day: Some("maps/day.tif".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.camera.lon_deg, -60.0);
        assert_eq!(config.camera.altitude_km, 8800.0);
        assert_eq!(config.render.size, 640);
        assert!(!config.render.panoramic);
        assert_eq!(config.theme.day_texture, "maps/day.tif");
        // Non-overridden fields retain defaults
        assert_eq!(config.camera.fov_deg, 60.0);
        assert_eq!(config.render.supersampling, 3);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_negative_numbers() {
        let args = CliArgs::try_parse_from([
            "spacecam",
            "--lat",
            "-33.5",
            "--lon",
            "-60",
            "--time",
            "2024-08-08T09:23:00Z",
            "--panoramic",
            "false",
        ])
        .unwrap();
        assert_eq!(args.lat, Some(-33.5));
        assert_eq!(args.lon, Some(-60.0));
        assert_eq!(args.time.as_deref(), Some("2024-08-08T09:23:00Z"));
        assert_eq!(args.panoramic, Some(false));
    }
}
