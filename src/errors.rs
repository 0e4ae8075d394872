//! Error Types
//!
//! The main error type [`EmberError`] covers all failure modes of the
//! renderer: GPU initialization, surface configuration, and resource
//! loading. All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, EmberError>`.
//!
//! Setup failures are unrecoverable: callers propagate them with `?` and
//! abort startup. Transient per-frame conditions (a lost or outdated
//! surface) are not errors — the frame loop skips the frame instead.

use thiserror::Error;

/// The main error type for the Ember renderer.
#[derive(Error, Debug)]
pub enum EmberError {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create a presentation surface for the window.
    #[error("Failed to create window surface: {0}")]
    SurfaceCreateFailed(#[from] wgpu::CreateSurfaceError),

    /// The surface reported no usable configuration.
    #[error("Surface cannot be configured: {0}")]
    SurfaceUnsupported(String),

    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(#[from] raw_window_handle::HandleError),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    // ========================================================================
    // Resource Loading Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed geometry file.
    #[error("Geometry parse error at line {line}: {message}")]
    GeometryParse {
        /// 1-based line number of the offending row.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },
}

/// Alias for `Result<T, EmberError>`.
pub type Result<T> = std::result::Result<T, EmberError>;
