//! # Page geometry
//!
//! All coordinates are SVG user units at 96 dpi. The page itself is
//! sized in millimeters and carries a viewBox of the equivalent
//! user-unit size, so the unit mapping is pinned explicitly.

use almanac::grid::GridIndex;
use serde::{Deserialize, Serialize};

/// Page width of a month page
pub const PAGE_WIDTH_MM: f64 = 380.0;
/// Page height of a month page
pub const PAGE_HEIGHT_MM: f64 = 265.0;

/// Horizontal stride between mini-month columns
pub const MINI_STRIDE_X: f64 = 24.0;
/// Vertical stride between mini-month rows
pub const MINI_STRIDE_Y: f64 = 20.0;
/// Vertical space reserved for the mini-month name line
pub const MINI_HEADER: f64 = 24.0;

/// Millimeters to user units at 96 dpi
pub fn mm_to_units(mm: f64) -> f64 {
    mm * 96.0 / 25.4
}

/// Size, spacing and anchor of the day grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMetrics {
    /// Top-left corner of the grid on the page
    pub anchor: (f64, f64),
    /// Width of one day cell
    pub cell_width: f64,
    /// Height of one day cell
    pub cell_height: f64,
    /// Gap between neighboring cells
    pub spacing: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        CellMetrics {
            anchor: (30.0, 150.0),
            cell_width: 180.0,
            cell_height: 143.0,
            spacing: 10.0,
        }
    }
}

/// Axis-aligned bounds of one grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// Left edge
    pub left: f64,
    /// Right edge
    pub right: f64,
    /// Top edge
    pub top: f64,
    /// Bottom edge
    pub bottom: f64,
}

impl CellMetrics {
    /// Horizontal distance between cell origins
    pub fn x_stride(&self) -> f64 {
        self.cell_width + self.spacing
    }

    /// Vertical distance between cell origins
    pub fn y_stride(&self) -> f64 {
        self.cell_height + self.spacing
    }

    /// The bounds of the cell at `index`
    pub fn cell_rect(&self, index: GridIndex) -> CellRect {
        let col = index.col() as f64;
        let row = index.row() as f64;
        CellRect {
            left: col * self.x_stride() + self.anchor.0,
            right: (col + 1.0) * self.x_stride() + self.anchor.0,
            top: row * self.y_stride() + self.anchor.1,
            bottom: (row + 1.0) * self.y_stride() + self.anchor.1,
        }
    }
}
