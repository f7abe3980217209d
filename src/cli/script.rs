//! The calendar script: a RON file describing one year of pages

use almanac::year::{Holiday, Weekday};
use mural_svg::geom::CellMetrics;
use mural_svg::style::PageStyle;
use serde::Deserialize;

/// Month names used when a script does not override them
pub const DEFAULT_MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// A calendar script describing one year's pages
#[derive(Debug, Deserialize)]
pub struct CalScript {
    /// The year number printed on every page
    pub year: i32,
    /// Weekday of January 1st; falls back to the builtin table
    #[serde(default)]
    pub start: Option<Weekday>,
    /// Month names; Spanish defaults when omitted
    #[serde(default)]
    pub names: Option<Vec<String>>,
    /// Days marked for holiday styling
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// Style overrides
    #[serde(default)]
    pub style: Option<PageStyle>,
    /// Grid geometry overrides
    #[serde(default)]
    pub metrics: Option<CellMetrics>,
}
