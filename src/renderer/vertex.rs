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

    /// Byte stride for buffer layouts
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.44, 0.77, 0.81, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
    pub const PIPE_BODY: [f32; 4] = [0.39, 0.67, 0.16, 1.0];
    pub const PIPE_CAP: [f32; 4] = [0.29, 0.48, 0.10, 1.0];
    pub const BIRD: [f32; 4] = [0.96, 0.78, 0.26, 1.0];
    pub const BIRD_BEAK: [f32; 4] = [0.88, 0.29, 0.14, 1.0];
    pub const GRASS: [f32; 4] = [0.34, 0.69, 0.34, 1.0];
    pub const DIRT: [f32; 4] = [0.82, 0.73, 0.43, 1.0];
    pub const DIRT_STRIPE: [f32; 4] = [0.73, 0.63, 0.35, 1.0];
}
