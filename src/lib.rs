#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod app;
pub mod errors;
pub mod renderer;
pub mod resources;

pub use app::{App, AppHandler, FrameState};
pub use errors::{EmberError, Result};
pub use renderer::Renderer;
pub use renderer::context::WgpuContext;
pub use renderer::mesh::GpuMesh;
pub use renderer::pipeline::VertexBufferDesc;
pub use renderer::settings::RendererSettings;
pub use renderer::uniforms::FrameUniforms;
pub use resources::geometry::GeometryData;

// Re-export so downstream crates use the same wgpu/glam versions.
pub use glam;
pub use wgpu;
