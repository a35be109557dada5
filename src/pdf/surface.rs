//! Drawing surfaces for the report engine.
//!
//! The layout code draws against [`Surface`] in top-down millimetre
//! coordinates (origin at the top-left of the page). [`PrintPdfSurface`]
//! maps that onto printpdf's bottom-up point space; the recording surface
//! used in tests keeps the coordinates as given.

use crate::pdf::layout::PAGE_HEIGHT;
use crate::{Color, Error};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    calculate_points_for_circle, BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Polygon, Pt,
    Rgb,
};

// The layout engine measures in f64; printpdf stores Mm as f32.
fn mm(v: f64) -> Mm {
    Mm(v as f32)
}

/// A page-oriented drawing target.
///
/// All positions and dimensions are millimetres from the top-left corner;
/// font sizes and line widths are points. Drawing targets the current page,
/// which [`Surface::add_page`] appends and selects. [`Surface::set_page`]
/// re-selects an earlier page so the table of contents and footers can be
/// stamped after the content pass.
pub trait Surface {
    /// Append a fresh page and make it current.
    fn add_page(&mut self);
    /// Number of pages so far (the current page counts).
    fn page_count(&self) -> usize;
    /// Select an existing page (0-based) as the drawing target.
    fn set_page(&mut self, index: usize);
    /// Draw a single line of text at a baseline position.
    fn text(&mut self, content: &str, x: f64, y: f64, size: f64, bold: bool, color: Color);
    /// Fill an axis-aligned rectangle.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
    /// Fill a circle centred at (cx, cy).
    fn circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color);
    /// Stroke a straight line.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color);
}

/// Surface backed by a printpdf document.
pub struct PrintPdfSurface {
    doc: PdfDocumentReference,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    current: usize,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PrintPdfSurface {
    /// A4 portrait document with the builtin Helvetica pair. The first page
    /// is created here and is current.
    pub fn new(title: &str) -> Result<Self, Error> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(210.0), Mm(297.0), "content");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| Error::Pdf(e.to_string()))?;
        Ok(Self {
            doc,
            pages: vec![(page, layer)],
            current: 0,
            regular,
            bold,
        })
    }

    /// Serialize the document. Producing bytes first means a failed render
    /// never leaves a truncated file on disk.
    pub fn finish(self) -> Result<Vec<u8>, Error> {
        self.doc
            .save_to_bytes()
            .map_err(|e| Error::Pdf(e.to_string()))
    }

    fn layer(&self) -> PdfLayerReference {
        let (page, layer) = self.pages[self.current];
        self.doc.get_page(page).get_layer(layer)
    }

    fn fill(color: Color) -> printpdf::Color {
        printpdf::Color::Rgb(Rgb::new(
            f32::from(color.r) / 255.0,
            f32::from(color.g) / 255.0,
            f32::from(color.b) / 255.0,
            None,
        ))
    }

    // printpdf's origin is the bottom-left corner.
    fn flip(y: f64) -> Mm {
        mm(PAGE_HEIGHT - y)
    }
}

impl Surface for PrintPdfSurface {
    fn add_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(210.0), Mm(297.0), "content");
        self.pages.push((page, layer));
        self.current = self.pages.len() - 1;
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        }
    }

    fn text(&mut self, content: &str, x: f64, y: f64, size: f64, bold: bool, color: Color) {
        let layer = self.layer();
        layer.set_fill_color(Self::fill(color));
        let font = if bold { &self.bold } else { &self.regular };
        layer.use_text(content, size as f32, mm(x), Self::flip(y), font);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let layer = self.layer();
        layer.set_fill_color(Self::fill(color));
        let ll = Point::new(mm(x), Self::flip(y + height));
        let lr = Point::new(mm(x + width), Self::flip(y + height));
        let ur = Point::new(mm(x + width), Self::flip(y));
        let ul = Point::new(mm(x), Self::flip(y));
        layer.add_polygon(Polygon {
            rings: vec![vec![(ll, false), (lr, false), (ur, false), (ul, false)]],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        let layer = self.layer();
        layer.set_fill_color(Self::fill(color));
        let ring = calculate_points_for_circle(
            Pt::from(mm(radius)),
            Pt::from(mm(cx)),
            Pt::from(Self::flip(cy)),
        );
        layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
        let layer = self.layer();
        layer.set_outline_color(Self::fill(color));
        layer.set_outline_thickness(width as f32);
        layer.add_line(Line {
            points: vec![
                (Point::new(mm(x1), Self::flip(y1)), false),
                (Point::new(mm(x2), Self::flip(y2)), false),
            ],
            is_closed: false,
        });
    }
}

/// In-memory surface that records draw calls, for layout assertions.
#[cfg(test)]
pub struct RecordingSurface {
    pages: Vec<Vec<DrawOp>>,
    current: usize,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        content: String,
        x: f64,
        y: f64,
        size: f64,
        bold: bool,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            current: 0,
        }
    }

    pub fn ops(&self, page: usize) -> &[DrawOp] {
        &self.pages[page]
    }

    /// All text drawn on a page, in draw order.
    pub fn page_text(&self, page: usize) -> Vec<&str> {
        self.pages[page]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All text in the document, concatenated per page.
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .flatten()
            .filter_map(|op| match op {
                DrawOp::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Lowest text baseline (largest y) on a page.
    pub fn max_text_y(&self, page: usize) -> f64 {
        self.pages[page]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { y, .. } => Some(*y),
                _ => None,
            })
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn add_page(&mut self) {
        self.pages.push(Vec::new());
        self.current = self.pages.len() - 1;
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        }
    }

    fn text(&mut self, content: &str, x: f64, y: f64, size: f64, bold: bool, _color: Color) {
        self.pages[self.current].push(DrawOp::Text {
            content: content.to_string(),
            x,
            y,
            size,
            bold,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, _color: Color) {
        self.pages[self.current].push(DrawOp::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64, _color: Color) {
        self.pages[self.current].push(DrawOp::Circle { cx, cy, radius });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, _width: f64, _color: Color) {
        self.pages[self.current].push(DrawOp::Line { x1, y1, x2, y2 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_tracks_pages() {
        let mut surface = RecordingSurface::new();
        surface.text("one", 10.0, 20.0, 9.5, false, crate::Color::new(0, 0, 0));
        surface.add_page();
        surface.text("two", 10.0, 20.0, 9.5, false, crate::Color::new(0, 0, 0));
        assert_eq!(surface.page_count(), 2);
        assert_eq!(surface.page_text(0), vec!["one"]);
        assert_eq!(surface.page_text(1), vec!["two"]);
    }

    #[test]
    fn test_set_page_redirects_drawing() {
        let mut surface = RecordingSurface::new();
        surface.add_page();
        surface.set_page(0);
        surface.text("back", 10.0, 20.0, 9.5, true, crate::Color::new(0, 0, 0));
        assert_eq!(surface.page_text(0), vec!["back"]);
        assert!(surface.page_text(1).is_empty());
    }

    #[test]
    fn test_printpdf_surface_produces_bytes() {
        let mut surface = PrintPdfSurface::new("test").unwrap();
        surface.text("hello", 20.0, 30.0, 12.0, false, crate::Color::new(0, 0, 0));
        surface.rect(10.0, 10.0, 50.0, 5.0, crate::Color::new(200, 0, 0));
        surface.add_page();
        let bytes = surface.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_printpdf_surface_draws_every_primitive() {
        let mut surface = PrintPdfSurface::new("test").unwrap();
        surface.text("bold", 18.0, 25.0, 16.0, true, crate::Color::new(37, 99, 235));
        surface.rect(18.0, 40.0, 120.5, 6.25, crate::Color::new(241, 245, 249));
        surface.circle(105.0, 80.0, 14.5, crate::Color::new(34, 197, 94));
        surface.line(18.0, 100.0, 192.0, 100.0, 0.4, crate::Color::new(203, 213, 225));
        surface.add_page();
        surface.set_page(0);
        surface.text("revisit", 18.0, 287.0, 7.5, false, crate::Color::new(113, 113, 122));
        let bytes = surface.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }
}
