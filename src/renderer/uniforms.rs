//! Frame Uniforms
//!
//! The uniform payload shared by the vertex and fragment stages: a tint
//! color and an animation time. The struct layout mirrors the WGSL-side
//! declaration; the trailing padding keeps the total size a multiple of
//! the 16-byte uniform alignment and carries no semantic value.

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

/// Minimum alignment for uniform buffer bindings.
pub const UNIFORM_ALIGNMENT: usize = 16;

/// CPU-side mirror of the `FrameUniforms` WGSL struct.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Global tint multiplied into every fragment.
    pub color: Vec4,
    /// Elapsed time in seconds, updated once per frame.
    pub time: f32,
    pub _padding: [f32; 3],
}

const _: () = assert!(std::mem::size_of::<FrameUniforms>() % UNIFORM_ALIGNMENT == 0);

impl FrameUniforms {
    /// Total byte size of the payload.
    pub const SIZE: wgpu::BufferAddress = std::mem::size_of::<FrameUniforms>() as wgpu::BufferAddress;

    /// Byte offset of the `time` field, the target of the per-frame
    /// partial write.
    pub const TIME_OFFSET: wgpu::BufferAddress =
        std::mem::offset_of!(FrameUniforms, time) as wgpu::BufferAddress;

    #[must_use]
    pub fn new(color: Vec4) -> Self {
        Self {
            color,
            time: 0.0,
            _padding: [0.0; 3],
        }
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::new(Vec4::ONE)
    }
}
