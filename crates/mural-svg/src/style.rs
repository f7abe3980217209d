//! Colors and font parameters of a calendar page
//!
//! Every field has the default the generator has always used, so a
//! calendar script only needs to state what it changes.

use serde::{Deserialize, Serialize};

use crate::primitives::Rgb;

/// The visual parameters of a month page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageStyle {
    /// Page background fill
    pub background: Rgb,
    /// Stroke color of the cell marks
    pub line_color: Rgb,
    /// Stroke width of the cell marks
    pub line_width: f64,
    /// Fill color of the day numbers
    pub font_color: Rgb,
    /// Fill color of holiday day numbers
    pub holiday_color: Rgb,
    /// Font size of the day numbers
    pub font_size: f64,
    /// Font size of the page title
    pub title_font_size: f64,
    /// Font size of the mini-month digits
    pub mini_font_size: f64,
    /// Opacity applied to days of the neighboring months
    pub off_month_opacity: f64,
}

impl Default for PageStyle {
    fn default() -> Self {
        PageStyle {
            background: Rgb(0xef, 0xee, 0xea),
            line_color: Rgb(0, 100, 0),
            line_width: 3.0,
            font_color: Rgb(0, 0, 0),
            holiday_color: Rgb(178, 34, 34),
            font_size: 32.0,
            title_font_size: 64.0,
            mini_font_size: 16.0,
            off_month_opacity: 0.6,
        }
    }
}
