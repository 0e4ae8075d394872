//! wgpu Context
//!
//! The [`WgpuContext`] holds core GPU handles: device, queue, surface, and
//! config. It performs the whole acquisition chain (instance → adapter →
//! device → configured surface) and is responsible for surface resize
//! handling.
//!
//! The adapter is a local of [`WgpuContext::new`]: it is used to derive the
//! device and query surface capabilities, then dropped before the
//! constructor returns.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::errors::{EmberError, Result};
use crate::renderer::settings::RendererSettings;

/// Core wgpu context holding GPU handles.
///
/// This struct owns the fundamental wgpu resources needed for rendering:
/// - `device`: GPU device for resource creation
/// - `queue`: Command submission queue
/// - `surface`: Window surface for presentation
/// - `config`: Surface configuration (format, present mode, etc.)
pub struct WgpuContext {
    /// The wgpu device for GPU operations
    pub device: wgpu::Device,
    /// The command queue for submitting work
    pub queue: wgpu::Queue,
    /// The window surface for presentation
    pub surface: wgpu::Surface<'static>,
    /// Surface configuration
    pub config: wgpu::SurfaceConfiguration,
    /// Clear color for the frame
    pub clear_color: wgpu::Color,
}

impl WgpuContext {
    pub async fn new<W>(
        window: W,
        settings: &RendererSettings,
        width: u32,
        height: u32,
    ) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let instance = match settings.backends {
            Some(backends) => wgpu::Instance::new(wgpu::InstanceDescriptor {
                backends,
                ..wgpu::InstanceDescriptor::new_without_display_handle()
            }),
            None => wgpu::Instance::default(),
        };

        let surface = instance.create_surface(window)?;

        log::info!("Requesting adapter...");
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: settings.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| EmberError::AdapterRequestFailed(e.to_string()))?;

        log_adapter_info(&adapter);

        log::info!("Requesting device...");
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("ember device"),
                required_features: settings.required_features,
                required_limits: settings.required_limits.clone(),
                memory_hints: wgpu::MemoryHints::Performance,
                ..Default::default()
            })
            .await?;

        // Runtime notifications are observability events only: they are
        // logged and never escalated into the fatal path.
        device.set_device_lost_callback(|reason, message| {
            log::warn!("GPU device lost ({reason:?}): {message}");
        });
        device.on_uncaptured_error(Arc::new(|error| {
            log::error!("Uncaptured GPU error: {error}");
        }));

        let config = Self::choose_surface_config(&surface, &adapter, settings, width, height)?;
        surface.configure(&device, &config);
        log::info!(
            "Surface configured: {}x{} {:?} ({:?})",
            config.width,
            config.height,
            config.format,
            config.present_mode
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
            clear_color: settings.clear_color,
        })
    }

    /// Queries surface capabilities and builds the configuration.
    ///
    /// The first reported format is selected — capability lists put the
    /// preferred format first. The color target of any pipeline rendering
    /// to this surface must use the same format.
    fn choose_surface_config(
        surface: &wgpu::Surface<'_>,
        adapter: &wgpu::Adapter,
        settings: &RendererSettings,
        width: u32,
        height: u32,
    ) -> Result<wgpu::SurfaceConfiguration> {
        let caps = surface.get_capabilities(adapter);
        let Some(&format) = caps.formats.first() else {
            return Err(EmberError::SurfaceUnsupported(
                "adapter reports no compatible surface format".to_string(),
            ));
        };

        let present_mode = if settings.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        Ok(wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode,
            desired_maximum_frame_latency: 2,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Blocks until all work submitted to the queue so far has completed.
    ///
    /// A completion callback flips a flag and the device is polled until
    /// the flag is observed true — the blocking rendition of the GPU
    /// runtime's asynchronous work-done acknowledgement. There is no
    /// timeout: an unanswered queue blocks the caller.
    pub fn wait_for_idle(&self) {
        let done = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&done);
        self.queue
            .on_submitted_work_done(move || flag.store(true, Ordering::Release));

        while !done.load(Ordering::Acquire) {
            if let Err(e) = self.device.poll(wgpu::PollType::wait_indefinitely()) {
                log::warn!("Device poll failed while draining queue: {e}");
                break;
            }
        }
    }

    /// Returns the surface color format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current surface dimensions.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}

/// Logs adapter identity and a digest of its limits at debug level.
fn log_adapter_info(adapter: &wgpu::Adapter) {
    let info = adapter.get_info();
    log::info!(
        "Got adapter: {} ({:?}, {:?})",
        info.name,
        info.device_type,
        info.backend
    );

    let limits = adapter.limits();
    log::debug!("Adapter limits:");
    log::debug!(" - max_texture_dimension_2d: {}", limits.max_texture_dimension_2d);
    log::debug!(" - max_bind_groups: {}", limits.max_bind_groups);
    log::debug!(" - max_vertex_buffers: {}", limits.max_vertex_buffers);
    log::debug!(" - max_vertex_attributes: {}", limits.max_vertex_attributes);
    log::debug!(" - max_buffer_size: {}", limits.max_buffer_size);
    log::debug!(
        " - min_uniform_buffer_offset_alignment: {}",
        limits.min_uniform_buffer_offset_alignment
    );
}
