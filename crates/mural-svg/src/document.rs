//! # SVG document assembly
//!
//! A [`Document`] collects drawing primitives and serializes a complete
//! standalone SVG file: XML prolog, root element with the physical page
//! size and a matching viewBox, a `<defs><style>` block with the page
//! stylesheet (and the embedded font, when one is supplied), then one
//! element per line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::geom::mm_to_units;
use crate::primitives::Element;
use crate::Error;

/// The stylesheet embedded into every page
#[derive(Debug, Clone)]
pub struct Stylesheet {
    font_family: String,
    font_face: Option<FontFace>,
}

/// A font file carried inside the stylesheet as a data URL
#[derive(Debug, Clone)]
struct FontFace {
    mime: &'static str,
    data: Vec<u8>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Stylesheet {
            font_family: "sans-serif".to_string(),
            font_face: None,
        }
    }
}

impl Stylesheet {
    /// A stylesheet referencing an installed font family
    pub fn with_family(font_family: &str) -> Self {
        Stylesheet {
            font_family: font_family.to_string(),
            font_face: None,
        }
    }

    /// Read a font file and embed it as an `@font-face` rule.
    ///
    /// The family name is the file stem; the format is taken from the
    /// extension (`ttf`, `otf`, `woff`, `woff2`).
    pub fn with_embedded_font(path: &Path) -> Result<Self, Error> {
        let mime = match path.extension().and_then(|e| e.to_str()) {
            Some("ttf") => "font/ttf",
            Some("otf") => "font/otf",
            Some("woff") => "font/woff",
            Some("woff2") => "font/woff2",
            _ => return Err(Error::UnknownFontFormat(path.to_path_buf())),
        };
        let data = std::fs::read(path)?;
        let font_family = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("embedded")
            .to_string();
        log::info!(
            "Embedding font `{}` ({} bytes) as family `{}`",
            path.display(),
            data.len(),
            font_family
        );
        Ok(Stylesheet {
            font_family,
            font_face: Some(FontFace { mime, data }),
        })
    }

    /// The family name text elements resolve against
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    fn write_defs<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "<defs><style>")?;
        if let Some(face) = &self.font_face {
            writeln!(
                w,
                "@font-face {{ font-family: \"{}\"; src: url(\"data:{};base64,{}\"); }}",
                self.font_family,
                face.mime,
                base64::encode(&face.data)
            )?;
        }
        writeln!(
            w,
            "text {{ font-family: \"{}\", sans-serif; }}",
            self.font_family
        )?;
        writeln!(w, "</style></defs>")
    }
}

/// One complete SVG page
#[derive(Debug, Clone)]
pub struct Document {
    width_mm: f64,
    height_mm: f64,
    stylesheet: Stylesheet,
    elements: Vec<Element>,
}

impl Document {
    /// Create an empty page of the given physical size
    pub fn new(width_mm: f64, height_mm: f64, stylesheet: Stylesheet) -> Self {
        Document {
            width_mm,
            height_mm,
            stylesheet,
            elements: Vec::new(),
        }
    }

    /// Page width in user units
    pub fn width_units(&self) -> f64 {
        mm_to_units(self.width_mm)
    }

    /// Page height in user units
    pub fn height_units(&self) -> f64 {
        mm_to_units(self.height_mm)
    }

    /// Append an element
    pub fn push<E: Into<Element>>(&mut self, element: E) {
        self.elements.push(element.into());
    }

    /// Serialize the whole page
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            w,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}mm" height="{}mm" viewBox="0 0 {:.1} {:.1}">"#,
            self.width_mm,
            self.height_mm,
            self.width_units(),
            self.height_units()
        )?;
        self.stylesheet.write_defs(w)?;
        for element in &self.elements {
            element.write(w)?;
        }
        writeln!(w, "</svg>")
    }

    /// Write the page to a file
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
    use crate::primitives::{Rect, Rgb};

    fn render(doc: &Document) -> String {
        let mut buf = Vec::new();
        doc.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new(PAGE_WIDTH_MM, PAGE_HEIGHT_MM, Stylesheet::default());
        let out = render(&doc);
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(out.contains("width=\"380mm\" height=\"265mm\""));
        assert!(out.contains("viewBox=\"0 0 1436.2 1001.6\""));
        assert!(out.contains("font-family: \"sans-serif\""));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_elements_in_order() {
        let mut doc = Document::new(PAGE_WIDTH_MM, PAGE_HEIGHT_MM, Stylesheet::default());
        doc.push(Rect {
            x: 0.0,
            y: 0.0,
            width: doc.width_units(),
            height: doc.height_units(),
            fill: Rgb(0xef, 0xee, 0xea),
        });
        let out = render(&doc);
        let style = out.find("</style>").unwrap();
        let rect = out.find("<rect").unwrap();
        assert!(style < rect);
        assert!(out.contains("fill=\"rgb(239,238,234)\""));
    }

    #[test]
    fn test_embedded_font_rule() {
        let dir = std::env::temp_dir();
        let path = dir.join("mural-svg-test-font.ttf");
        std::fs::write(&path, b"\0\x01\0\0stub").unwrap();
        let sheet = Stylesheet::with_embedded_font(&path).unwrap();
        assert_eq!(sheet.font_family(), "mural-svg-test-font");
        let doc = Document::new(PAGE_WIDTH_MM, PAGE_HEIGHT_MM, sheet);
        let out = render(&doc);
        assert!(out.contains("@font-face"));
        assert!(out.contains("data:font/ttf;base64,"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unknown_font_format() {
        let err = Stylesheet::with_embedded_font(Path::new("font.xyz")).unwrap_err();
        assert!(matches!(err, Error::UnknownFontFormat(_)));
    }
}
