#![warn(missing_docs)]
//! # SVG page backend
//!
//! Turns the layouts from the `almanac` crate into standalone SVG files:
//! physical cell geometry ([`geom`]), the small set of drawing
//! primitives the pages need ([`primitives`]), document assembly with an
//! embedded stylesheet and optional font ([`document`]), and the page
//! composition itself ([`page`]).

pub mod document;
pub mod geom;
pub mod page;
pub mod primitives;
pub mod style;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to assemble or write a page
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a font file or writing a page failed
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The font file extension maps to no known format
    #[error("unknown font format: `{0}`")]
    UnknownFontFormat(PathBuf),
}
