#![warn(missing_docs)]
//! # Calendar model and grid layout
//!
//! This crate holds the data side of the mural calendar generator: the
//! per-year input record ([`year::YearSpec`]), the 7-column month grid
//! arithmetic ([`grid::layout_month`]) and the small reference grids for
//! neighboring months ([`mini::layout_mini`]).
//!
//! Nothing in here knows about geometry or output formats; layouts are
//! expressed as grid indices and the rendering backend maps those to
//! physical positions.

pub mod error;
pub mod grid;
pub mod mini;
pub mod year;

pub use error::Error;
