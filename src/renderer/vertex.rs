//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (sRGB, written straight to a non-sRGB target)
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const FIELD: [f32; 4] = rgb(0x2d, 0x50, 0x16);
    pub const GOAL_FRAME: [f32; 4] = rgb(0xff, 0xff, 0xff);
    pub const GOALKEEPER_BODY: [f32; 4] = rgb(0xff, 0xeb, 0x3b);
    pub const GOALKEEPER_HEAD: [f32; 4] = rgb(0xff, 0x98, 0x00);
    pub const BALL: [f32; 4] = rgb(0xff, 0xff, 0xff);
    pub const BALL_PATTERN: [f32; 4] = rgb(0x00, 0x00, 0x00);
}
