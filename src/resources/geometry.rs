//! Geometry File Format
//!
//! Parses the ad-hoc line-oriented geometry format into CPU-side buffers:
//!
//! ```text
//! [points]
//! # x y r g b (2D) or x y z r g b (3D)
//! 0.5 0.0   1.0 0.0 0.0
//!
//! [indices]
//! 0 1 2
//! ```
//!
//! Blank lines and `#` comments are skipped, CRLF endings are normalized,
//! and content before the first section header is ignored. Malformed rows
//! are a [`GeometryParse`](crate::EmberError::GeometryParse) error carrying
//! the 1-based line number.

use std::fs;
use std::path::Path;

use crate::errors::{EmberError, Result};

/// Number of color components per point row.
pub const COLOR_COMPONENTS: u32 = 3;

/// CPU-side geometry: interleaved point data plus a triangle index list.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Interleaved per-point floats: `dimensions` position components
    /// followed by 3 color components.
    pub point_data: Vec<f32>,
    /// Triangle corners, three per row.
    pub index_data: Vec<u16>,
    /// Position components per point (2 or 3).
    pub dimensions: u32,
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    Points,
    Indices,
}

impl GeometryData {
    /// Floats per point row.
    #[inline]
    #[must_use]
    pub fn components_per_point(&self) -> u32 {
        self.dimensions + COLOR_COMPONENTS
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> u32 {
        self.point_data.len() as u32 / self.components_per_point()
    }

    /// Number of indices (always a multiple of 3).
    #[inline]
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.index_data.len() as u32
    }

    /// Reads and parses a geometry file.
    pub fn load(path: impl AsRef<Path>, dimensions: u32) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).inspect_err(|e| {
            log::error!("Could not load geometry from {}: {e}", path.display());
        })?;
        let geometry = Self::parse(&text, dimensions)?;
        log::info!(
            "Loaded geometry from {}: {} points, {} indices",
            path.display(),
            geometry.point_count(),
            geometry.index_count()
        );
        Ok(geometry)
    }

    /// Parses geometry text with `dimensions` position components per
    /// point (2 or 3).
    pub fn parse(text: &str, dimensions: u32) -> Result<Self> {
        let components = (dimensions + COLOR_COMPONENTS) as usize;

        let mut point_data = Vec::new();
        let mut index_data = Vec::new();
        let mut section = Section::None;

        for (number, raw) in text.lines().enumerate() {
            let number = number + 1;
            // `str::lines` only strips `\r` when it precedes `\n`; a file
            // without a final newline can still carry one.
            let line = raw.strip_suffix('\r').unwrap_or(raw);

            if line == "[points]" {
                section = Section::Points;
            } else if line == "[indices]" {
                section = Section::Indices;
            } else if line.is_empty() || line.starts_with('#') {
                // Comment.
            } else if section == Section::Points {
                let row = parse_row::<f32>(line, number, components, "point")?;
                point_data.extend_from_slice(&row);
            } else if section == Section::Indices {
                let row = parse_row::<u16>(line, number, 3, "index")?;
                index_data.extend_from_slice(&row);
            }
        }

        Ok(Self {
            point_data,
            index_data,
            dimensions,
        })
    }
}

fn parse_row<T: std::str::FromStr>(
    line: &str,
    number: usize,
    expected: usize,
    kind: &str,
) -> Result<Vec<T>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(EmberError::GeometryParse {
            line: number,
            message: format!(
                "expected {expected} values in {kind} row, found {}",
                tokens.len()
            ),
        });
    }

    tokens
        .iter()
        .map(|token| {
            token.parse().map_err(|_| EmberError::GeometryParse {
                line: number,
                message: format!("invalid {kind} value {token:?}"),
            })
        })
        .collect()
}
