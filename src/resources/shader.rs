//! Shader Loading
//!
//! WGSL source → shader module, from embedded text or a file on disk.
//! Entry points are `vs_main` and `fs_main` by convention.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::errors::Result;

/// Compiles a shader module from WGSL source text.
pub fn shader_module_from_source(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
    })
}

/// Reads a WGSL file and compiles it, labeling the module with the path.
pub fn load_shader_module(
    device: &wgpu::Device,
    path: impl AsRef<Path>,
) -> Result<wgpu::ShaderModule> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).inspect_err(|e| {
        log::error!("Could not load shader from {}: {e}", path.display());
    })?;
    log::info!("Loaded shader module from {}", path.display());
    Ok(shader_module_from_source(
        device,
        &path.display().to_string(),
        &source,
    ))
}
