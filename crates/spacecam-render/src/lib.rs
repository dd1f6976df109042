//! CPU ray tracer producing views of a textured, sunlit planet from orbit.
//!
//! A [`Camera`] is placed above the planet, every pixel is traced through a
//! per-worker [`RayContext`] and colored by the [`shading`] pipeline
//! (surface, atmosphere, solar disk). Rows are rendered in parallel and the
//! result is an RGBA8 [`Frame`].

mod camera;
mod error;
mod frame;
mod ray_context;
mod renderer;
mod scene;
pub mod shading;
mod supersample;
mod texture;
mod theme;

pub use camera::Camera;
pub use error::RenderError;
pub use frame::Frame;
pub use ray_context::RayContext;
pub use renderer::{RenderOptions, render, render_with_textures};
pub use scene::{SceneConstants, ShadingParams, SpecularModel};
pub use supersample::supersampling_offsets;
pub use texture::{ConstantTexture, SurfaceSamples, SurfaceTextures, Texture, TextureProvider};
pub use theme::Theme;
