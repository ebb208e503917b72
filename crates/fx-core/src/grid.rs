//! Lattice geometry shared by the path generator and the renderer.
//!
//! The grid is implicit: only column/row counts and the px spacing are
//! materialized. Coordinates use `i32` so a path step may leave the valid
//! range before being clamped back to an edge.

use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid spacing must be positive, got {0}")]
    NonPositiveSpacing(f32),
    #[error("viewport {0}x{1} px yields a lattice smaller than 2x2")]
    ViewportTooSmall(f32, f32),
}

/// One lattice point at a multiple of the grid spacing in both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPoint {
    pub col: i32,
    pub row: i32,
}

impl GridPoint {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Lattice dimensions derived from a viewport. Derivation is pure, so the
/// same viewport always yields the same counts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDims {
    pub cols: i32,
    pub rows: i32,
    pub spacing: f32,
}

impl GridDims {
    pub fn from_viewport(width: f32, height: f32, spacing: f32) -> Result<Self, ConfigError> {
        if !(spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing(spacing));
        }
        let cols = (width / spacing).ceil() as i32 + 1;
        let rows = (height / spacing).ceil() as i32 + 1;
        // A 1-wide or 1-tall lattice has no interior to cross, so an edge
        // start is already an exit and paths would collapse to one point.
        if cols < 2 || rows < 2 {
            return Err(ConfigError::ViewportTooSmall(width, height));
        }
        Ok(Self { cols, rows, spacing })
    }

    #[inline]
    pub fn contains(&self, p: GridPoint) -> bool {
        p.col >= 0 && p.col < self.cols && p.row >= 0 && p.row < self.rows
    }

    /// Clamp an out-of-range coordinate to the nearest in-range edge point.
    #[inline]
    pub fn clamp(&self, col: i32, row: i32) -> GridPoint {
        GridPoint {
            col: col.clamp(0, self.cols - 1),
            row: row.clamp(0, self.rows - 1),
        }
    }

    #[inline]
    pub fn on_edge(&self, p: GridPoint) -> bool {
        p.col == 0 || p.col == self.cols - 1 || p.row == 0 || p.row == self.rows - 1
    }

    /// Pixel position of a lattice point.
    #[inline]
    pub fn to_px(&self, p: GridPoint) -> Vec2 {
        Vec2::new(p.col as f32 * self.spacing, p.row as f32 * self.spacing)
    }
}
