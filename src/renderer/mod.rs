//! WebGPU rendering module
//!
//! `scene` turns game state into flat-colored triangles in field space;
//! `pipeline` uploads them to a WebGPU surface.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;

use thiserror::Error;

/// Rendering failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface lost or outdated")]
    SurfaceLost,
    #[error("out of memory")]
    OutOfMemory,
    #[error("surface error: {0}")]
    Surface(String),
    #[error("no suitable adapter: {0}")]
    Adapter(String),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("unsupported surface: {0}")]
    Unsupported(&'static str),
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Surface(other.to_string()),
        }
    }
}

/// Anything a finished frame can be drawn onto
pub trait Surface {
    /// Draw one frame of field-space triangles
    fn present(&mut self, vertices: &[Vertex]) -> Result<(), RenderError>;

    /// Called after `RenderError::SurfaceLost` so the next frame can succeed
    fn recover(&mut self) {}
}

/// Surface that accepts frames without drawing them (native runs)
#[derive(Debug, Default)]
pub struct HeadlessSurface;

impl Surface for HeadlessSurface {
    fn present(&mut self, _vertices: &[Vertex]) -> Result<(), RenderError> {
        Ok(())
    }
}
