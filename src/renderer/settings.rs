//! Renderer Settings
//!
//! Global configuration consumed once during [`Renderer::init`] to set up
//! the GPU context. There is no runtime reconfiguration: the settings
//! describe a fixed target (format selection and present mode are applied
//! when the surface is first configured).
//!
//! [`Renderer::init`]: crate::renderer::Renderer::init

/// Global configuration for renderer initialization.
///
/// # Example
///
/// ```rust,ignore
/// use ember::RendererSettings;
///
/// let settings = RendererSettings {
///     vsync: true,
///     clear_color: wgpu::Color { r: 0.05, g: 0.05, b: 0.05, a: 1.0 },
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct RendererSettings {
    /// Enable vertical synchronization.
    ///
    /// When `true` the surface uses FIFO presentation: the frame rate is
    /// capped to the display refresh rate and no tearing occurs. When
    /// `false` presentation runs uncapped where the platform allows it.
    pub vsync: bool,

    /// Force a specific wgpu backend (Vulkan, Metal, DX12, …).
    ///
    /// `None` lets wgpu choose the best available backend for the platform.
    pub backends: Option<wgpu::Backends>,

    /// GPU adapter selection preference.
    ///
    /// - `HighPerformance`: prefer a discrete / dedicated GPU
    /// - `LowPower`: prefer an integrated GPU
    pub power_preference: wgpu::PowerPreference,

    /// Background clear color applied at the start of each frame.
    pub clear_color: wgpu::Color,

    /// Required wgpu features that must be supported by the adapter.
    ///
    /// Initialization fails if these are unavailable.
    pub required_features: wgpu::Features,

    /// Required wgpu limits (max buffer sizes, binding counts, etc.).
    pub required_limits: wgpu::Limits,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            backends: None,
            power_preference: wgpu::PowerPreference::HighPerformance,
            clear_color: wgpu::Color {
                r: 0.05,
                g: 0.05,
                b: 0.05,
                a: 1.0,
            },
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
        }
    }
}
