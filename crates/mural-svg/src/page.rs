//! # Month page composition
//!
//! Assembles one printable page: background, title line, mini-months
//! for the neighboring months in the header band, a row of weekday
//! initials, then the day grid.
//! Cell marks are open polylines along the bottom and right edges of
//! each cell; days that did not fit the five rows get a diagonal mark
//! splitting the cell they share with the day one week earlier.

use almanac::grid::{CellKind, DayCell, GridIndex, MonthLayout, GRID_COLUMNS};
use almanac::mini::MiniLayout;
use almanac::year::Weekday;

use crate::document::{Document, Stylesheet};
use crate::geom::{
    CellMetrics, CellRect, MINI_HEADER, MINI_STRIDE_X, MINI_STRIDE_Y, PAGE_HEIGHT_MM,
    PAGE_WIDTH_MM,
};
use crate::primitives::{Baseline, Polyline, Rect, Rgb, Text, TextAnchor};
use crate::style::PageStyle;

/// Inset of the diagonal mark from the cell edges
const DIAGONAL_INSET: f64 = 10.0;
/// Top edge of the header band contents
const HEADER_TOP: f64 = 20.0;
/// Gap between the two mini-months
const MINI_GAP: f64 = 40.0;

/// A neighboring month shown as a mini grid
pub struct MiniMonth<'a> {
    /// The month's display name
    pub name: &'a str,
    /// Day placements
    pub layout: MiniLayout,
}

/// Everything needed to compose one month page
pub struct MonthContext<'a> {
    /// The month's display name
    pub title: &'a str,
    /// The year number
    pub year: i32,
    /// Day placements of the main grid
    pub layout: &'a MonthLayout,
    /// The previous month, when it is part of the year
    pub mini_prev: Option<MiniMonth<'a>>,
    /// The next month, when it is part of the year
    pub mini_next: Option<MiniMonth<'a>>,
    /// Colors and font sizes
    pub style: &'a PageStyle,
    /// Grid geometry
    pub metrics: CellMetrics,
}

/// Compose one month page into a document
pub fn render_month(ctx: &MonthContext<'_>, stylesheet: &Stylesheet) -> Document {
    let mut doc = Document::new(PAGE_WIDTH_MM, PAGE_HEIGHT_MM, stylesheet.clone());
    let style = ctx.style;

    doc.push(Rect {
        x: 0.0,
        y: 0.0,
        width: doc.width_units(),
        height: doc.height_units(),
        fill: style.background,
    });

    // Title line in the header band
    doc.push(Text {
        x: ctx.metrics.anchor.0 + ctx.metrics.spacing,
        y: HEADER_TOP,
        content: format!("{} {}", ctx.title, ctx.year),
        fill: style.font_color,
        font_size: style.title_font_size,
        opacity: 1.0,
        anchor: TextAnchor::Start,
        baseline: Baseline::Hanging,
    });

    // Mini-months, right-aligned: previous month then next month
    let mini_width = GRID_COLUMNS as f64 * MINI_STRIDE_X;
    let next_x = (doc.width_units() - ctx.metrics.anchor.0 - mini_width).floor();
    let prev_x = next_x - mini_width - MINI_GAP;
    if let Some(mini) = &ctx.mini_prev {
        push_mini(&mut doc, mini, (prev_x, HEADER_TOP), style);
    }
    if let Some(mini) = &ctx.mini_next {
        push_mini(&mut doc, mini, (next_x, HEADER_TOP), style);
    }

    // Weekday initials right above their columns
    for (col, day) in Weekday::ALL.iter().enumerate() {
        let rect = ctx.metrics.cell_rect(GridIndex(col));
        doc.push(Text {
            x: rect.left + 2.0 * ctx.metrics.spacing,
            y: rect.top - ctx.metrics.spacing,
            content: day.initial().to_string(),
            fill: style.font_color,
            font_size: style.mini_font_size,
            opacity: 1.0,
            anchor: TextAnchor::Start,
            baseline: Baseline::Alphabetic,
        });
    }

    for cell in &ctx.layout.cells {
        let rect = ctx.metrics.cell_rect(cell.index);
        match cell.kind {
            CellKind::Current => push_day(&mut doc, cell, rect, 1.0, ctx),
            CellKind::OffMonth => push_day(&mut doc, cell, rect, style.off_month_opacity, ctx),
            CellKind::Overflow => push_overflow_day(&mut doc, cell, rect, ctx),
        }
    }

    doc
}

fn day_color(cell: &DayCell, style: &PageStyle) -> Rgb {
    if cell.holiday {
        style.holiday_color
    } else {
        style.font_color
    }
}

/// A full day cell: an open angle along the bottom and right edges,
/// day number in the upper left corner
fn push_day(doc: &mut Document, cell: &DayCell, rect: CellRect, opacity: f64, ctx: &MonthContext) {
    let style = ctx.style;
    let spacing = ctx.metrics.spacing;

    doc.push(Polyline {
        points: vec![
            (rect.left + spacing, rect.bottom),
            (rect.right, rect.bottom),
            (rect.right, rect.top + spacing),
        ],
        stroke: style.line_color,
        stroke_width: style.line_width,
        opacity,
    });
    doc.push(Text {
        x: rect.left + 2.0 * spacing,
        y: rect.top + 2.0 * spacing,
        content: cell.day.to_string(),
        fill: day_color(cell, style),
        font_size: style.font_size,
        opacity,
        anchor: TextAnchor::Start,
        baseline: Baseline::Hanging,
    });
}

/// An overflow day drawn into the lower right half of a shared cell,
/// split off by a diagonal mark
fn push_overflow_day(doc: &mut Document, cell: &DayCell, rect: CellRect, ctx: &MonthContext) {
    let style = ctx.style;
    let spacing = ctx.metrics.spacing;

    doc.push(Polyline {
        points: vec![
            (
                rect.left + spacing + DIAGONAL_INSET,
                rect.bottom - DIAGONAL_INSET,
            ),
            (
                rect.right - DIAGONAL_INSET,
                rect.top + spacing + DIAGONAL_INSET,
            ),
        ],
        stroke: style.line_color,
        stroke_width: style.line_width,
        opacity: 1.0,
    });
    doc.push(Text {
        x: rect.right - 2.0 * spacing,
        y: rect.bottom - 2.0 * spacing,
        content: cell.day.to_string(),
        fill: day_color(cell, style),
        font_size: style.font_size,
        opacity: 1.0,
        anchor: TextAnchor::End,
        baseline: Baseline::Alphabetic,
    });
}

/// A mini month: name line, then right-aligned digits in a tight grid
fn push_mini(doc: &mut Document, mini: &MiniMonth<'_>, anchor: (f64, f64), style: &PageStyle) {
    doc.push(Text {
        x: anchor.0,
        y: anchor.1,
        content: mini.name.to_string(),
        fill: style.font_color,
        font_size: style.mini_font_size,
        opacity: 1.0,
        anchor: TextAnchor::Start,
        baseline: Baseline::Hanging,
    });
    for cell in &mini.layout.cells {
        let col = cell.index.col() as f64;
        let row = cell.index.row() as f64;
        doc.push(Text {
            x: anchor.0 + (col + 1.0) * MINI_STRIDE_X - 4.0,
            y: anchor.1 + MINI_HEADER + row * MINI_STRIDE_Y,
            content: cell.day.to_string(),
            fill: style.font_color,
            font_size: style.mini_font_size,
            opacity: 1.0,
            anchor: TextAnchor::End,
            baseline: Baseline::Hanging,
        });
    }
}
