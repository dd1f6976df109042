//! Frame orchestration: splits the image into rows and shades them on worker threads.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use crossbeam_channel::unbounded;
use serde::{Deserialize, Serialize};
use spacecam_math::{Color, Vector3};
use tracing::{debug, info};

use crate::shading::{shade_ray, sun_visible_fraction};
use crate::supersample::supersampling_offsets;
use crate::{
    Camera, Frame, RayContext, RenderError, ShadingParams, SurfaceTextures, TextureProvider, Theme,
};

/// Output size and sampling of one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Samples per pixel along each axis; `n²` rays per pixel.
    pub supersampling: u32,
    /// Worker threads, 0 for one per logical CPU.
    pub workers: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::square(640, 3)
    }
}

impl RenderOptions {
    pub fn square(size: u32, supersampling: u32) -> Self {
        Self {
            width: size,
            height: size,
            supersampling,
            workers: 0,
        }
    }

    /// Threads actually spawned for a frame of `self.height` rows.
    pub fn worker_count(&self) -> usize {
        let requested = if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        };
        requested.clamp(1, self.height.max(1) as usize)
    }
}

/// Acquire the theme's textures from `provider` and render one frame.
pub fn render<P: TextureProvider>(
    camera: &Camera,
    sun_direction: Vector3,
    options: &RenderOptions,
    theme: &Theme,
    params: &ShadingParams,
    provider: &P,
) -> Result<Frame, RenderError> {
    let textures = SurfaceTextures::load(theme, provider)?;
    render_with_textures(camera, sun_direction, options, theme, params, &textures)
}

/// Render one frame with already-loaded textures.
///
/// The result depends only on the inputs, not on the number of workers or
/// the order in which rows are picked up.
pub fn render_with_textures(
    camera: &Camera,
    sun_direction: Vector3,
    options: &RenderOptions,
    theme: &Theme,
    params: &ShadingParams,
    textures: &SurfaceTextures,
) -> Result<Frame, RenderError> {
    if options.width == 0 || options.height == 0 {
        return Err(RenderError::EmptyFrame {
            width: options.width,
            height: options.height,
        });
    }
    let offsets = supersampling_offsets(options.supersampling);
    if offsets.is_empty() {
        return Err(RenderError::NoSamples);
    }

    let sun_direction = sun_direction.normalize_or_zero();
    let shader = RowShader {
        camera,
        sun_direction,
        theme,
        params,
        textures,
        offsets: &offsets,
        sun_visible_fraction: sun_visible_fraction(camera.position, sun_direction, &camera.scene),
        width: options.width,
        height: options.height,
    };
    let workers = options.worker_count();

    info!(
        "Rendering {}x{} at {}x supersampling on {} workers (sun visible: {:.3})",
        options.width,
        options.height,
        options.supersampling,
        workers,
        shader.sun_visible_fraction
    );
    let start = Instant::now();

    let mut frame = Frame::new(options.width, options.height);
    let row_bytes = frame.row_bytes();
    run_workers(&shader, &mut frame.pixels, row_bytes, workers)?;

    info!(
        "Rendered {}x{} in {:.2?} (mean luminance {:.1})",
        options.width,
        options.height,
        start.elapsed(),
        frame.mean_luminance()
    );
    Ok(frame)
}

/// Hand disjoint row slices of `pixels` to `workers` scoped threads.
fn run_workers(
    shader: &RowShader<'_>,
    pixels: &mut [u8],
    row_bytes: usize,
    workers: usize,
) -> Result<(), RenderError> {
    let (row_tx, row_rx) = unbounded::<(u32, &mut [u8])>();
    for (y, row) in pixels.chunks_mut(row_bytes).enumerate() {
        row_tx
            .send((y as u32, row))
            .map_err(|_| RenderError::WorkerPanicked)?;
    }
    drop(row_tx);

    let rows_done = AtomicU32::new(0);
    let progress_step = (shader.height / 10).max(1);

    std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for index in 0..workers {
            let rows = row_rx.clone();
            let rows_done = &rows_done;
            let handle = std::thread::Builder::new()
                .name(format!("render-worker-{index}"))
                .spawn_scoped(scope, move || {
                    let mut ctx = RayContext::new(
                        shader.camera.position,
                        shader.sun_direction,
                        &shader.camera.scene,
                    );
                    while let Ok((y, row)) = rows.recv() {
                        shader.shade_row(&mut ctx, y, row);
                        let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
                        if done % progress_step == 0 {
                            debug!("Render progress: {}%", done * 100 / shader.height);
                        }
                    }
                });
            match handle {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    // Workers already running drain the queue before the scope ends.
                    return Err(RenderError::WorkerSpawn(err));
                }
            }
        }

        let mut panicked = false;
        for handle in handles {
            panicked |= handle.join().is_err();
        }
        if panicked {
            Err(RenderError::WorkerPanicked)
        } else {
            Ok(())
        }
    })
}

/// Read-only state shared by all workers of one frame.
struct RowShader<'a> {
    camera: &'a Camera,
    sun_direction: Vector3,
    theme: &'a Theme,
    params: &'a ShadingParams,
    textures: &'a SurfaceTextures,
    offsets: &'a [(f64, f64)],
    sun_visible_fraction: f64,
    width: u32,
    height: u32,
}

impl RowShader<'_> {
    fn shade_row(&self, ctx: &mut RayContext, y: u32, row: &mut [u8]) {
        for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
            let color = self.shade_pixel(ctx, x as f64, f64::from(y));
            pixel.copy_from_slice(&color.to_rgba8());
        }
    }

    fn shade_pixel(&self, ctx: &mut RayContext, x: f64, y: f64) -> Color {
        let mut sum = Color::TRANSPARENT;
        for &(dx, dy) in self.offsets {
            let dir = self.camera.compute_ray(x + dx, y + dy, self.width, self.height);
            ctx.set_ray_direction(dir);
            sum += shade_ray(
                ctx,
                self.textures,
                self.theme,
                self.params,
                self.sun_visible_fraction,
            );
        }

        let mut color = sum.scale(1.0 / self.offsets.len() as f64) * self.theme.warm;
        if self.params.saturation != 1.0 {
            color = color.boost_saturation(self.params.saturation);
        }
        color.composite_over_black()
    }
}
