//! Merge rendered tiles into one mosaic image.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spacecam_cli::{MosaicError, OutputError, assemble, parse_grid, read_frame, write_frame};
use thiserror::Error;
use tracing::{error, info};

/// Merge equally sized tiles, row by row, into a `<cols>x<rows>` mosaic.
#[derive(Parser, Debug)]
#[command(name = "spacecam-merge")]
struct MergeArgs {
    /// Grid layout, e.g. `2x2`.
    grid: String,

    /// Output image (.png, .jpg or .jpeg).
    output: PathBuf,

    /// Input tiles in row-major order.
    #[arg(required = true)]
    tiles: Vec<PathBuf>,
}

#[derive(Debug, Error)]
enum MergeError {
    #[error(transparent)]
    Mosaic(#[from] MosaicError),

    #[error("could not load tile {path}: {source}")]
    Tile { path: PathBuf, source: OutputError },

    #[error(transparent)]
    Output(#[from] OutputError),
}

fn main() -> ExitCode {
    let args = MergeArgs::parse();
    spacecam_log::init_logging(None, false, None);

    match merge(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn merge(args: &MergeArgs) -> Result<(), MergeError> {
    let (cols, rows) = parse_grid(&args.grid)?;
    let expected = cols as usize * rows as usize;
    if args.tiles.len() != expected {
        return Err(MosaicError::TileCount {
            expected,
            got: args.tiles.len(),
        }
        .into());
    }

    let tiles = args
        .tiles
        .iter()
        .map(|path| {
            info!("Processing {}", path.display());
            read_frame(path).map_err(|source| MergeError::Tile {
                path: path.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mosaic = assemble(&tiles, cols, rows)?;
    info!("Creating {}", args.output.display());
    write_frame(&args.output, &mosaic, png::Compression::Default)?;
    Ok(())
}
