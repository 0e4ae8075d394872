//! Renderer
//!
//! The [`Renderer`] owns the GPU context plus the resources of the single
//! rendering configuration this crate supports: one flat-color pipeline,
//! one mesh, and one frame-uniform buffer. Per-frame work is a linear
//! acquire → clear → draw → submit → present sequence.

pub mod context;
pub mod mesh;
pub mod pipeline;
pub mod settings;
pub mod uniforms;

use glam::Vec4;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::errors::Result;
use crate::resources::shader;

use self::context::WgpuContext;
use self::mesh::GpuMesh;
use self::pipeline::VertexBufferDesc;
use self::settings::RendererSettings;
use self::uniforms::FrameUniforms;

/// The built-in WGSL program (2D positions + RGB colors, uniform tint).
pub const FLAT_COLOR_SHADER: &str = include_str!("shaders/flat_color.wgsl");

/// GPU renderer for a single pipeline/mesh configuration.
///
/// Field order matters: Rust drops fields in declaration order, so every
/// resource created from the device is listed before the context that owns
/// the device.
pub struct Renderer {
    mesh: Option<GpuMesh>,
    pipeline: Option<wgpu::RenderPipeline>,
    uniform_bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    uniform_layout: wgpu::BindGroupLayout,
    uniforms: FrameUniforms,
    pub ctx: WgpuContext,
}

impl Renderer {
    /// Initializes the GPU context and the frame-uniform resources.
    ///
    /// This performs the whole setup chain (instance, adapter, device,
    /// configured surface), uploads the initial uniform payload, and
    /// flushes a warm-up submission so that any device-level problem
    /// surfaces here rather than mid-frame.
    ///
    /// # Errors
    ///
    /// Any failure in the chain is fatal and aborts startup: no adapter,
    /// device request rejected, or an unconfigurable surface.
    pub async fn init<W>(
        window: W,
        settings: &RendererSettings,
        width: u32,
        height: u32,
    ) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let ctx = WgpuContext::new(window, settings, width, height).await?;

        let uniform_layout = pipeline::create_uniform_bind_group_layout(&ctx.device);
        let uniforms = FrameUniforms::default();
        let uniform_buffer = mesh::upload_buffer(
            &ctx.device,
            &ctx.queue,
            "Frame Uniforms",
            wgpu::BufferUsages::UNIFORM,
            bytemuck::bytes_of(&uniforms),
        );
        let uniform_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Uniforms BindGroup"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Warm-up Encoder"),
            });
        ctx.queue.submit(std::iter::once(encoder.finish()));
        ctx.wait_for_idle();
        log::debug!("GPU queue flushed, renderer ready");

        Ok(Self {
            mesh: None,
            pipeline: None,
            uniform_bind_group,
            uniform_buffer,
            uniform_layout,
            uniforms,
            ctx,
        })
    }

    /// Builds the render pipeline from WGSL source text.
    pub fn set_pipeline(&mut self, source: &str, label: &str, buffers: &[VertexBufferDesc]) {
        let module = shader::shader_module_from_source(&self.ctx.device, label, source);
        self.pipeline = Some(pipeline::create_render_pipeline(
            &self.ctx.device,
            self.ctx.surface_format(),
            &module,
            buffers,
            &self.uniform_layout,
        ));
    }

    /// Builds the render pipeline from a WGSL file on disk.
    pub fn set_pipeline_from_path(
        &mut self,
        path: impl AsRef<std::path::Path>,
        buffers: &[VertexBufferDesc],
    ) -> Result<()> {
        let module = shader::load_shader_module(&self.ctx.device, path)?;
        self.pipeline = Some(pipeline::create_render_pipeline(
            &self.ctx.device,
            self.ctx.surface_format(),
            &module,
            buffers,
            &self.uniform_layout,
        ));
        Ok(())
    }

    pub fn set_mesh(&mut self, mesh: GpuMesh) {
        self.mesh = Some(mesh);
    }

    /// Sets the uniform tint color and rewrites the full payload.
    pub fn set_tint(&mut self, color: Vec4) {
        self.uniforms.color = color;
        self.ctx
            .queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));
    }

    /// Updates the animation time with a partial 4-byte write at the
    /// field's offset, leaving the rest of the buffer untouched. This is
    /// the only per-frame mutation path.
    pub fn set_time(&mut self, time: f32) {
        self.uniforms.time = time;
        self.ctx.queue.write_buffer(
            &self.uniform_buffer,
            FrameUniforms::TIME_OFFSET,
            bytemuck::bytes_of(&time),
        );
    }

    /// Renders one frame.
    ///
    /// A surface that cannot produce a texture (resize in flight, lost
    /// swapchain) skips the frame entirely: nothing is drawn, nothing is
    /// submitted, and no renderer state changes. A suboptimal acquisition
    /// still renders. Without a pipeline and mesh the pass only clears.
    pub fn render_frame(&mut self) {
        let output = match self.ctx.surface.get_current_texture() {
            wgpu::CurrentSurfaceTexture::Success(output)
            | wgpu::CurrentSurfaceTexture::Suboptimal(output) => output,
            wgpu::CurrentSurfaceTexture::Lost | wgpu::CurrentSurfaceTexture::Outdated => {
                log::debug!("Surface not ready, skipping frame");
                return;
            }
            other => {
                log::error!("Failed to acquire surface texture: {other:?}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let (Some(pipeline), Some(mesh)) = (&self.pipeline, &self.mesh) {
                pass.set_pipeline(pipeline);
                for (slot, buffer) in mesh.vertex_buffers.iter().enumerate() {
                    pass.set_vertex_buffer(slot as u32, buffer.slice(..));
                }
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                if let Some((index_buffer, index_count)) = &mesh.index {
                    pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                    pass.draw_indexed(0..*index_count, 0, 0..1);
                } else {
                    pass.draw(0..mesh.vertex_count, 0..1);
                }
            }
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    /// Blocks until all submitted GPU work has completed.
    pub fn wait_for_idle(&self) {
        self.ctx.wait_for_idle();
    }

    #[inline]
    pub fn device(&self) -> &wgpu::Device {
        &self.ctx.device
    }

    #[inline]
    pub fn queue(&self) -> &wgpu::Queue {
        &self.ctx.queue
    }

    /// Returns the current surface size in pixels as `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.ctx.size()
    }
}
