//! Resource Loading
//!
//! File-based inputs: the line-oriented geometry format and WGSL shader
//! source.

pub mod geometry;
pub mod shader;

pub use geometry::GeometryData;
