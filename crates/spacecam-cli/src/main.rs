//! Renders a view of the planet from orbit and writes it as a PNG.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spacecam_cli::app::png_compression;
use spacecam_cli::{AppError, parse_render_time, render_from_config, write_png};
use spacecam_config::{CliArgs, Config, default_config_dir};
use tracing::error;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    spacecam_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs, config: &Config) -> Result<(), AppError> {
    let time = parse_render_time(args.time.as_deref())?;
    let frame = render_from_config(config, time)?;
    write_png(
        &config.output.path,
        &frame,
        png_compression(config.output.compression),
    )?;
    Ok(())
}

fn report(err: &dyn std::error::Error) {
    error!("{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        error!("  caused by: {cause}");
        source = cause.source();
    }
}
