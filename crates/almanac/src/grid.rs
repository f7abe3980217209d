//! # Month grid layout
//!
//! Places every visible day number of one month into a 7×5 grid of
//! cells. The grid holds the month's own days, the tail of the previous
//! month, and the head of the next month. When a month spans six
//! calendar weeks, the overflow days share a cell with the day one week
//! earlier.
//!
//! Positions are pure indices; mapping an index to physical coordinates
//! is the rendering backend's business.

use crate::year::MonthSlice;

/// Number of columns, one per weekday
pub const GRID_COLUMNS: usize = 7;
/// Number of full rows
pub const GRID_ROWS: usize = 5;
/// Number of full cells in the grid
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// 0-based cell position within the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GridIndex(pub usize);

impl GridIndex {
    /// Row of this cell, top to bottom
    pub fn row(self) -> usize {
        self.0 / GRID_COLUMNS
    }

    /// Column of this cell, left to right
    pub fn col(self) -> usize {
        self.0 % GRID_COLUMNS
    }
}

/// How a day occupies its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// A day of the month itself
    Current,
    /// A day of the previous or next month shown in an unused cell
    OffMonth,
    /// A day that did not fit the five rows, drawn into a split cell
    Overflow,
}

/// One placed day number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Position in the grid
    pub index: GridIndex,
    /// The day number to print, 1-based
    pub day: u8,
    /// How the day occupies the cell
    pub kind: CellKind,
    /// Whether the day is on the holiday list
    pub holiday: bool,
}

/// All placed day numbers of one month page
#[derive(Debug, Clone)]
pub struct MonthLayout {
    /// Placements in drawing order
    pub cells: Vec<DayCell>,
}

impl MonthLayout {
    /// Iterate over the placements of one kind
    pub fn of_kind(&self, kind: CellKind) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(move |c| c.kind == kind)
    }
}

/// Compute the grid placement for a full month page.
///
/// The month fits the grid when `start + days_in_month <= 35`. Days past
/// that bound become [`CellKind::Overflow`] placements at the index one
/// week before their natural position, so the first leftover day always
/// lands at index 28 (bottom-left cell).
pub fn layout_month(slice: &MonthSlice) -> MonthLayout {
    let start = slice.start.index();
    let days = slice.days_in_month as usize;

    let fits = start + days <= GRID_CELLS;
    let fitting = if fits { days } else { GRID_CELLS - start };
    if !fits {
        log::debug!(
            "month {} does not fit, days past {} get split cells",
            slice.month,
            fitting
        );
    }

    let mut cells = Vec::with_capacity(days + GRID_COLUMNS);

    // Tail of the previous month in the leading cells
    if start != 0 {
        let prev = slice.days_in_previous_month as usize;
        for (index, day) in ((prev - start + 1)..=prev).enumerate() {
            cells.push(DayCell {
                index: GridIndex(index),
                day: day as u8,
                kind: CellKind::OffMonth,
                holiday: false,
            });
        }
    }

    // The month itself
    for day in 1..=fitting {
        cells.push(DayCell {
            index: GridIndex(start + day - 1),
            day: day as u8,
            kind: CellKind::Current,
            holiday: slice.holidays.contains(&(day as u8)),
        });
    }

    if fits {
        // Head of the next month, only up to the end of the last used row
        let last = start + days - 1;
        let trailing = GRID_COLUMNS - (last + 1) % GRID_COLUMNS;
        if trailing != GRID_COLUMNS {
            for day in 1..=trailing {
                cells.push(DayCell {
                    index: GridIndex(last + day),
                    day: day as u8,
                    kind: CellKind::OffMonth,
                    holiday: false,
                });
            }
        }
    } else {
        // Leftover days share the cell of the day one week earlier
        for day in (fitting + 1)..=days {
            cells.push(DayCell {
                index: GridIndex(start + day - 1 - GRID_COLUMNS),
                day: day as u8,
                kind: CellKind::Overflow,
                holiday: slice.holidays.contains(&(day as u8)),
            });
        }
    }

    MonthLayout { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year::Weekday;

    fn slice(days: u8, start: Weekday, prev: u8) -> MonthSlice {
        MonthSlice {
            month: 0,
            days_in_month: days,
            start,
            days_in_previous_month: prev,
            holidays: Vec::new(),
        }
    }

    fn find(layout: &MonthLayout, kind: CellKind, day: u8) -> DayCell {
        *layout
            .cells
            .iter()
            .find(|c| c.kind == kind && c.day == day)
            .unwrap()
    }

    #[test]
    fn test_grid_index() {
        assert_eq!(GridIndex(0).row(), 0);
        assert_eq!(GridIndex(0).col(), 0);
        assert_eq!(GridIndex(8).row(), 1);
        assert_eq!(GridIndex(8).col(), 1);
        assert_eq!(GridIndex(34).row(), 4);
        assert_eq!(GridIndex(34).col(), 6);
    }

    #[test]
    fn test_exact_four_weeks() {
        // 28 days starting on Monday: no off-month cells at all
        let layout = layout_month(&slice(28, Weekday::Monday, 31));
        assert_eq!(layout.cells.len(), 28);
        assert!(layout.cells.iter().all(|c| c.kind == CellKind::Current));
        assert_eq!(find(&layout, CellKind::Current, 28).index, GridIndex(27));
    }

    #[test]
    fn test_leading_and_trailing() {
        // January 2026: 31 days starting Thursday after a 31-day December
        let layout = layout_month(&slice(31, Weekday::Thursday, 31));
        assert_eq!(layout.cells.len(), 35);

        let leading: Vec<_> = layout.of_kind(CellKind::OffMonth).collect();
        assert_eq!(leading[0].day, 29);
        assert_eq!(leading[0].index, GridIndex(0));
        assert_eq!(leading[2].day, 31);
        assert_eq!(leading[2].index, GridIndex(2));

        assert_eq!(find(&layout, CellKind::Current, 1).index, GridIndex(3));
        assert_eq!(find(&layout, CellKind::Current, 31).index, GridIndex(33));

        // One next-month day closes the last row
        assert_eq!(leading.len(), 4);
        assert_eq!(leading[3].day, 1);
        assert_eq!(leading[3].index, GridIndex(34));
    }

    #[test]
    fn test_trailing_fills_last_row_only() {
        // 30 days starting Monday: the last day sits at index 29 and five
        // next-month days close out that week row
        let layout = layout_month(&slice(30, Weekday::Monday, 31));
        let trailing: Vec<_> = layout.of_kind(CellKind::OffMonth).collect();
        assert_eq!(trailing.len(), 5);
        assert_eq!(trailing[0].day, 1);
        assert_eq!(trailing[0].index, GridIndex(30));
        assert_eq!(trailing[4].day, 5);
        assert_eq!(trailing[4].index, GridIndex(34));
    }

    #[test]
    fn test_no_trailing_when_month_ends_the_grid() {
        // 30 days starting Saturday: day 30 lands exactly on index 34
        let layout = layout_month(&slice(30, Weekday::Saturday, 31));
        assert_eq!(find(&layout, CellKind::Current, 30).index, GridIndex(34));
        assert_eq!(layout.of_kind(CellKind::Overflow).count(), 0);
        // Only the five leading previous-month days are off-month
        assert_eq!(layout.of_kind(CellKind::OffMonth).count(), 5);
    }

    #[test]
    fn test_overflow_single_day() {
        // 31 days starting Saturday: day 31 does not fit
        let layout = layout_month(&slice(31, Weekday::Saturday, 30));
        let overflow: Vec<_> = layout.of_kind(CellKind::Overflow).collect();
        assert_eq!(overflow.len(), 1);
        assert_eq!(overflow[0].day, 31);
        assert_eq!(overflow[0].index, GridIndex(28));

        // It shares the cell of the day one week earlier
        assert_eq!(find(&layout, CellKind::Current, 24).index, GridIndex(28));
        // No trailing next-month days in the overflow case
        assert_eq!(layout.of_kind(CellKind::OffMonth).count(), 5);
    }

    #[test]
    fn test_overflow_two_days() {
        // 31 days starting Sunday: days 30 and 31 do not fit
        let layout = layout_month(&slice(31, Weekday::Sunday, 31));
        let overflow: Vec<_> = layout.of_kind(CellKind::Overflow).collect();
        assert_eq!(overflow.len(), 2);
        assert_eq!(overflow[0].day, 30);
        assert_eq!(overflow[0].index, GridIndex(28));
        assert_eq!(overflow[1].day, 31);
        assert_eq!(overflow[1].index, GridIndex(29));
        assert_eq!(find(&layout, CellKind::Current, 23).index, GridIndex(28));
        assert_eq!(find(&layout, CellKind::Current, 24).index, GridIndex(29));
    }

    #[test]
    fn test_full_cell_indices_unique() {
        for &start in &Weekday::ALL {
            for &days in &[28u8, 29, 30, 31] {
                let layout = layout_month(&slice(days, start, 31));
                let mut indices: Vec<usize> = layout
                    .cells
                    .iter()
                    .filter(|c| c.kind != CellKind::Overflow)
                    .map(|c| c.index.0)
                    .collect();
                indices.sort_unstable();
                let before = indices.len();
                indices.dedup();
                assert_eq!(indices.len(), before, "start {:?} days {}", start, days);
                assert!(indices.iter().all(|&i| i < GRID_CELLS));
            }
        }
    }

    #[test]
    fn test_every_day_placed_once() {
        for &start in &Weekday::ALL {
            for &days in &[28u8, 29, 30, 31] {
                let layout = layout_month(&slice(days, start, 31));
                let mut own: Vec<u8> = layout
                    .cells
                    .iter()
                    .filter(|c| c.kind != CellKind::OffMonth)
                    .map(|c| c.day)
                    .collect();
                own.sort_unstable();
                let expected: Vec<u8> = (1..=days).collect();
                assert_eq!(own, expected, "start {:?} days {}", start, days);
            }
        }
    }

    #[test]
    fn test_overflow_stays_in_bottom_row() {
        for &start in &Weekday::ALL {
            let layout = layout_month(&slice(31, start, 31));
            for cell in layout.of_kind(CellKind::Overflow) {
                assert_eq!(cell.index.row(), GRID_ROWS - 1);
            }
        }
    }

    #[test]
    fn test_holiday_flags() {
        let mut s = slice(31, Weekday::Saturday, 30);
        s.holidays = vec![1, 31];
        let layout = layout_month(&s);
        assert!(find(&layout, CellKind::Current, 1).holiday);
        assert!(!find(&layout, CellKind::Current, 2).holiday);
        // Day 31 overflows but is still a holiday
        assert!(find(&layout, CellKind::Overflow, 31).holiday);
        // Off-month days are never holidays
        assert!(layout.of_kind(CellKind::OffMonth).all(|c| !c.holiday));
    }
}
