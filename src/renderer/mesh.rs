//! GPU Mesh Buffers
//!
//! Uploads CPU-side geometry into GPU buffers. Buffers are created at the
//! exact data size with `COPY_DST` plus their role flag, then filled with a
//! single full-contents queue write at offset 0.

use crate::resources::geometry::GeometryData;

/// Index data must be padded so the upload size is a multiple of
/// `wgpu::COPY_BUFFER_ALIGNMENT` (4 bytes). With 16-bit indices that means
/// an even element count; the placeholder element is never read because
/// draws use the real index count.
#[must_use]
pub fn pad_index_data(indices: &[u16]) -> Vec<u16> {
    let mut data = indices.to_vec();
    if data.len() % 2 != 0 {
        data.push(0);
    }
    data
}

/// Creates a buffer of exactly `bytes.len()` bytes and queue-writes the
/// full contents into it.
pub fn upload_buffer(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    usage: wgpu::BufferUsages,
    bytes: &[u8],
) -> wgpu::Buffer {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: bytes.len() as wgpu::BufferAddress,
        usage: usage | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    queue.write_buffer(&buffer, 0, bytes);
    buffer
}

/// Geometry resident on the GPU.
///
/// Vertex buffers are bound at consecutive slots in vector order. When an
/// index buffer is present the mesh is drawn indexed with the stored real
/// index count; otherwise a plain draw of `vertex_count` vertices.
pub struct GpuMesh {
    pub vertex_buffers: Vec<wgpu::Buffer>,
    pub index: Option<(wgpu::Buffer, u32)>,
    pub vertex_count: u32,
}

impl GpuMesh {
    /// Uploads interleaved position+color point data plus a triangle index
    /// list, as produced by the geometry loader.
    pub fn interleaved(device: &wgpu::Device, queue: &wgpu::Queue, geometry: &GeometryData) -> Self {
        let vertex_buffer = upload_buffer(
            device,
            queue,
            "Point Buffer",
            wgpu::BufferUsages::VERTEX,
            bytemuck::cast_slice(&geometry.point_data),
        );

        let padded = pad_index_data(&geometry.index_data);
        let index_buffer = upload_buffer(
            device,
            queue,
            "Index Buffer",
            wgpu::BufferUsages::INDEX,
            bytemuck::cast_slice(&padded),
        );

        Self {
            vertex_buffers: vec![vertex_buffer],
            index: Some((index_buffer, geometry.index_count())),
            vertex_count: geometry.point_count(),
        }
    }

    /// Uploads separate position and color arrays into two vertex buffers
    /// (slots 0 and 1) for a non-indexed draw.
    ///
    /// `positions` holds `dimensions` floats per vertex, `colors` three.
    pub fn planar(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        positions: &[f32],
        colors: &[f32],
        dimensions: u32,
    ) -> Self {
        let vertex_count = positions.len() as u32 / dimensions;
        debug_assert_eq!(colors.len() as u32, vertex_count * 3);

        let position_buffer = upload_buffer(
            device,
            queue,
            "Position Buffer",
            wgpu::BufferUsages::VERTEX,
            bytemuck::cast_slice(positions),
        );
        let color_buffer = upload_buffer(
            device,
            queue,
            "Color Buffer",
            wgpu::BufferUsages::VERTEX,
            bytemuck::cast_slice(colors),
        );

        Self {
            vertex_buffers: vec![position_buffer, color_buffer],
            index: None,
            vertex_count,
        }
    }
}
