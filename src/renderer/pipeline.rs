//! Pipeline Builder
//!
//! Declares vertex buffer layouts, the uniform bind-group layout, and
//! compiles the render pipeline. Layouts are owned values
//! ([`VertexBufferDesc`]) converted to borrowed `wgpu::VertexBufferLayout`
//! at pipeline-creation time.
//!
//! Geometry carries a position attribute (location 0, 2 or 3 components)
//! and an RGB color attribute (location 1), either interleaved in a single
//! buffer or split across two buffers bound at slots 0 and 1.

use std::num::NonZeroU64;

use crate::renderer::uniforms::FrameUniforms;

/// Number of color components per vertex.
pub const COLOR_COMPONENTS: u64 = 3;

const FLOAT_SIZE: u64 = std::mem::size_of::<f32>() as u64;

/// An owned vertex buffer layout.
#[derive(Debug, Clone)]
pub struct VertexBufferDesc {
    pub array_stride: wgpu::BufferAddress,
    pub step_mode: wgpu::VertexStepMode,
    pub attributes: Vec<wgpu::VertexAttribute>,
}

impl VertexBufferDesc {
    pub fn as_wgpu(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.array_stride,
            step_mode: self.step_mode,
            attributes: &self.attributes,
        }
    }

    /// Layout for a single buffer interleaving position and color,
    /// `dimensions` position components followed by 3 color components
    /// per vertex.
    #[must_use]
    pub fn interleaved(dimensions: u32) -> Self {
        let dimensions = u64::from(dimensions);
        Self {
            array_stride: (dimensions + COLOR_COMPONENTS) * FLOAT_SIZE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: vec![
                wgpu::VertexAttribute {
                    format: position_format(dimensions),
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: dimensions * FLOAT_SIZE,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Layout for a tightly packed position-only buffer (slot 0 in the
    /// planar configuration).
    #[must_use]
    pub fn positions(dimensions: u32) -> Self {
        let dimensions = u64::from(dimensions);
        Self {
            array_stride: dimensions * FLOAT_SIZE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: vec![wgpu::VertexAttribute {
                format: position_format(dimensions),
                offset: 0,
                shader_location: 0,
            }],
        }
    }

    /// Layout for a tightly packed RGB color buffer (slot 1 in the planar
    /// configuration).
    #[must_use]
    pub fn colors() -> Self {
        Self {
            array_stride: COLOR_COMPONENTS * FLOAT_SIZE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: vec![wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 1,
            }],
        }
    }
}

fn position_format(dimensions: u64) -> wgpu::VertexFormat {
    match dimensions {
        2 => wgpu::VertexFormat::Float32x2,
        3 => wgpu::VertexFormat::Float32x3,
        other => panic!("unsupported position dimensionality: {other}"),
    }
}

/// Creates the bind-group layout for the frame uniform buffer: binding 0,
/// visible to both vertex and fragment stages.
pub fn create_uniform_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Frame Uniforms Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new(FrameUniforms::SIZE),
            },
            count: None,
        }],
    })
}

/// Compiles the render pipeline from a shader module.
///
/// The single color target uses the configured surface format — it must
/// match the surface exactly — with source-over alpha blending. The
/// shader module is not retained: the pipeline holds its own reference,
/// so callers may drop the module immediately after this returns.
pub fn create_render_pipeline(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    shader: &wgpu::ShaderModule,
    buffers: &[VertexBufferDesc],
    uniform_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Render Pipeline Layout"),
        bind_group_layouts: &[Some(uniform_layout)],
        immediate_size: 0,
    });

    let vertex_layouts: Vec<_> = buffers.iter().map(VertexBufferDesc::as_wgpu).collect();

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Render Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_layouts,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
