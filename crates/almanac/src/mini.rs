//! # Mini-month layout
//!
//! Small reference grids for the neighboring months, shown in the page
//! header next to the main grid. A mini month is digits only: no
//! off-month days and no overflow, so it uses up to six rows.

use crate::grid::GridIndex;
use crate::year::Weekday;

/// Maximum number of rows a mini month can use
pub const MINI_ROWS: usize = 6;

/// One day number in a mini grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniCell {
    /// Position in the 7×6 grid
    pub index: GridIndex,
    /// The day number to print, 1-based
    pub day: u8,
}

/// All day numbers of one mini month
#[derive(Debug, Clone)]
pub struct MiniLayout {
    /// Placements in day order
    pub cells: Vec<MiniCell>,
}

impl MiniLayout {
    /// Number of rows actually used
    pub fn rows(&self) -> usize {
        match self.cells.last() {
            Some(cell) => cell.index.row() + 1,
            None => 0,
        }
    }
}

/// Compute the placement of a mini month.
///
/// Every month fits the 7×6 range: the worst case, 31 days starting on
/// Sunday, ends at index 36.
pub fn layout_mini(days_in_month: u8, start: Weekday) -> MiniLayout {
    let start = start.index();
    let cells = (1..=days_in_month)
        .map(|day| MiniCell {
            index: GridIndex(start + day as usize - 1),
            day,
        })
        .collect();
    MiniLayout { cells }
}
