//! # Drawing primitives
//!
//! The thin element set the page composer emits: a background rectangle,
//! polylines for the cell marks and text for the day numbers. Each
//! primitive serializes itself as one SVG element per line.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// An RGB color, serialized as `rgb(r,g,b)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.0, self.1, self.2)
    }
}

/// Horizontal alignment of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Grow to the right of the position
    Start,
    /// Grow to the left of the position
    End,
}

/// Vertical alignment of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// Position marks the top of the glyphs
    Hanging,
    /// Position marks the baseline
    Alphabetic,
}

/// A filled rectangle
#[derive(Debug, Clone)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
    /// Fill color
    pub fill: Rgb,
}

/// An open stroked polyline
#[derive(Debug, Clone)]
pub struct Polyline {
    /// Vertices in drawing order
    pub points: Vec<(f64, f64)>,
    /// Stroke color
    pub stroke: Rgb,
    /// Stroke width
    pub stroke_width: f64,
    /// Stroke opacity, 1.0 for fully opaque
    pub opacity: f64,
}

/// A single positioned text run
#[derive(Debug, Clone)]
pub struct Text {
    /// Anchor position
    pub x: f64,
    /// Anchor position
    pub y: f64,
    /// The characters to draw
    pub content: String,
    /// Fill color
    pub fill: Rgb,
    /// Font size in user units
    pub font_size: f64,
    /// Fill opacity, 1.0 for fully opaque
    pub opacity: f64,
    /// Horizontal alignment
    pub anchor: TextAnchor,
    /// Vertical alignment
    pub baseline: Baseline,
}

/// Any element of a page
#[derive(Debug, Clone)]
pub enum Element {
    /// A filled rectangle
    Rect(Rect),
    /// An open stroked polyline
    Polyline(Polyline),
    /// A positioned text run
    Text(Text),
}

impl From<Rect> for Element {
    fn from(r: Rect) -> Self {
        Element::Rect(r)
    }
}

impl From<Polyline> for Element {
    fn from(p: Polyline) -> Self {
        Element::Polyline(p)
    }
}

impl From<Text> for Element {
    fn from(t: Text) -> Self {
        Element::Text(t)
    }
}

/// Replace the XML-reserved characters of a text run
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl Rect {
    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(
            w,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            self.x, self.y, self.width, self.height, self.fill
        )
    }
}

impl Polyline {
    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, r#"<polyline points=""#)?;
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                write!(w, " ")?;
            }
            write!(w, "{},{}", x, y)?;
        }
        write!(
            w,
            r#"" fill="none" stroke="{}" stroke-width="{}""#,
            self.stroke, self.stroke_width
        )?;
        if self.opacity != 1.0 {
            write!(w, r#" stroke-opacity="{}""#, self.opacity)?;
        }
        writeln!(w, "/>")
    }
}

impl Text {
    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(
            w,
            r#"<text x="{}" y="{}" fill="{}" font-size="{}""#,
            self.x, self.y, self.fill, self.font_size
        )?;
        if self.opacity != 1.0 {
            write!(w, r#" fill-opacity="{}""#, self.opacity)?;
        }
        if let TextAnchor::End = self.anchor {
            write!(w, r#" text-anchor="end""#)?;
        }
        if let Baseline::Hanging = self.baseline {
            write!(w, r#" dominant-baseline="hanging""#)?;
        }
        writeln!(w, ">{}</text>", escape(&self.content))
    }
}

impl Element {
    /// Serialize this element as one line of SVG
    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Element::Rect(r) => r.write(w),
            Element::Polyline(p) => p.write(w),
            Element::Text(t) => t.write(w),
        }
    }
}
