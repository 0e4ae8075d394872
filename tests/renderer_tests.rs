//! Renderer Layout Tests
//!
//! CPU-side invariants of the GPU-facing data:
//! - Frame uniform payload size and field offsets
//! - Index padding (even element count, 4-byte-aligned upload size)
//! - Vertex buffer layout strides, offsets, formats, and locations

use ember::renderer::mesh::pad_index_data;
use ember::renderer::pipeline;
use ember::renderer::uniforms::UNIFORM_ALIGNMENT;
use ember::wgpu::{VertexFormat, VertexStepMode};
use ember::{FrameUniforms, VertexBufferDesc};

// ============================================================================
// Frame uniforms
// ============================================================================

#[test]
fn uniform_payload_is_aligned() {
    assert_eq!(std::mem::size_of::<FrameUniforms>() % UNIFORM_ALIGNMENT, 0);
    assert_eq!(FrameUniforms::SIZE, 32);
}

#[test]
fn time_offset_points_at_time_field() {
    assert_eq!(FrameUniforms::TIME_OFFSET, 16);

    let uniforms = FrameUniforms {
        time: 1.5,
        ..Default::default()
    };
    let bytes = bytemuck::bytes_of(&uniforms);
    let offset = FrameUniforms::TIME_OFFSET as usize;
    assert_eq!(bytes[offset..offset + 4], 1.5_f32.to_le_bytes());
}

// ============================================================================
// Index padding
// ============================================================================

#[test]
fn odd_index_count_is_padded_to_even() {
    let indices: Vec<u16> = (0..9).collect();
    let padded = pad_index_data(&indices);

    assert_eq!(padded.len(), 10);
    assert_eq!(&padded[..9], &indices[..]);
    assert_eq!(padded[9], 0);
    assert_eq!((padded.len() * std::mem::size_of::<u16>()) % 4, 0);
}

#[test]
fn even_index_count_is_unchanged() {
    let indices: Vec<u16> = vec![0, 1, 2, 0, 2, 3];
    let padded = pad_index_data(&indices);

    assert_eq!(padded, indices);
    assert_eq!((padded.len() * std::mem::size_of::<u16>()) % 4, 0);
}

#[test]
fn empty_index_list_stays_empty() {
    assert!(pad_index_data(&[]).is_empty());
}

// ============================================================================
// Vertex buffer layouts
// ============================================================================

#[test]
fn interleaved_2d_layout() {
    let desc = VertexBufferDesc::interleaved(2);

    assert_eq!(desc.array_stride, 20);
    assert_eq!(desc.step_mode, VertexStepMode::Vertex);
    assert_eq!(desc.attributes.len(), 2);

    assert_eq!(desc.attributes[0].format, VertexFormat::Float32x2);
    assert_eq!(desc.attributes[0].offset, 0);
    assert_eq!(desc.attributes[0].shader_location, 0);

    assert_eq!(desc.attributes[1].format, VertexFormat::Float32x3);
    assert_eq!(desc.attributes[1].offset, 8);
    assert_eq!(desc.attributes[1].shader_location, 1);
}

#[test]
fn interleaved_3d_layout() {
    let desc = VertexBufferDesc::interleaved(3);

    assert_eq!(desc.array_stride, 24);
    assert_eq!(desc.attributes[0].format, VertexFormat::Float32x3);
    assert_eq!(desc.attributes[1].offset, 12);
}

#[test]
fn planar_layouts() {
    let positions = VertexBufferDesc::positions(2);
    let colors = VertexBufferDesc::colors();

    assert_eq!(positions.array_stride, 8);
    assert_eq!(positions.attributes.len(), 1);
    assert_eq!(positions.attributes[0].shader_location, 0);
    assert_eq!(positions.attributes[0].format, VertexFormat::Float32x2);

    assert_eq!(colors.array_stride, 12);
    assert_eq!(colors.attributes.len(), 1);
    assert_eq!(colors.attributes[0].shader_location, 1);
    assert_eq!(colors.attributes[0].format, VertexFormat::Float32x3);
}

#[test]
fn as_wgpu_borrows_the_owned_layout() {
    let desc = VertexBufferDesc::interleaved(2);
    let layout = desc.as_wgpu();

    assert_eq!(layout.array_stride, desc.array_stride);
    assert_eq!(layout.attributes.len(), desc.attributes.len());
    assert_eq!(pipeline::COLOR_COMPONENTS, 3);
}
