//! Page geometry, the pagination cursor, and text measurement.
//!
//! Width estimates use the standard Helvetica advance widths, bucketed into
//! a handful of classes. Exact metrics are not needed; the wrap just has to
//! stay inside the column for ordinary prose.

use crate::pdf::surface::Surface;

// A4 portrait, millimetres.
pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
pub const MARGIN: f64 = 18.0;
/// Strip above the bottom margin kept clear for the footer pass.
pub const FOOTER_ZONE: f64 = 10.0;
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

const PT_TO_MM: f64 = 0.352_778;

/// Vertical pen position, top-down. Every variable-height block checks
/// [`Cursor::ensure_room`] before drawing, so content never collides with
/// the footer zone.
pub struct Cursor {
    pub y: f64,
}

impl Cursor {
    pub fn top() -> Self {
        Self { y: MARGIN }
    }

    /// Lowest y content may occupy.
    pub fn floor() -> f64 {
        PAGE_HEIGHT - MARGIN - FOOTER_ZONE
    }

    /// Break to a new page unless `needed` millimetres fit on this one.
    /// Returns true when a break happened.
    pub fn ensure_room(&mut self, surface: &mut dyn Surface, needed: f64) -> bool {
        if self.y + needed > Self::floor() {
            surface.add_page();
            self.y = MARGIN;
            true
        } else {
            false
        }
    }

    pub fn advance(&mut self, height: f64) {
        self.y += height;
    }

    /// Start a fresh page unconditionally.
    pub fn page_break(&mut self, surface: &mut dyn Surface) {
        surface.add_page();
        self.y = MARGIN;
    }
}

/// Baseline-to-baseline distance in millimetres for a font size in points.
pub fn line_height(size: f64) -> f64 {
    size * 1.45 * PT_TO_MM
}

/// Approximate rendered width of a line, in millimetres.
pub fn text_width(content: &str, size: f64) -> f64 {
    content.chars().map(char_factor).sum::<f64>() * size * PT_TO_MM
}

// Helvetica advance width divided by the em, by character class.
fn char_factor(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.28,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | ' ' | '/' => 0.33,
        'm' | 'M' | 'W' | 'w' => 0.85,
        'A'..='Z' | '@' | '%' => 0.70,
        '0'..='9' => 0.56,
        _ => 0.52,
    }
}

/// Greedy word wrap to a column width. Words longer than the column are
/// hard-split so a pathological token cannot overflow the page.
pub fn wrap(content: &str, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        for piece in split_overlong(word, size, max_width) {
            let candidate = if current.is_empty() {
                piece.clone()
            } else {
                format!("{current} {piece}")
            };
            if text_width(&candidate, size) <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_overlong(word: &str, size: f64, max_width: f64) -> Vec<String> {
    if text_width(word, size) <= max_width {
        return vec![word.to_string()];
    }
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if text_width(&piece, size) > max_width {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::surface::RecordingSurface;

    #[test]
    fn test_wrap_stays_inside_column() {
        let text = "The quick brown fox jumps over the lazy dog and keeps \
                    running until the paragraph finally wraps onto several lines.";
        let lines = wrap(text, 9.5, 80.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 9.5) <= 80.0, "overflow: {line}");
        }
        // Nothing lost in the wrap.
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_empty_is_empty() {
        assert!(wrap("", 9.5, 80.0).is_empty());
        assert!(wrap("   ", 9.5, 80.0).is_empty());
    }

    #[test]
    fn test_overlong_word_is_hard_split() {
        let word = "a".repeat(400);
        let lines = wrap(&word, 9.5, 40.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 9.5) <= 40.0);
        }
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_cursor_breaks_before_footer_zone() {
        let mut surface = RecordingSurface::new();
        let mut cursor = Cursor::top();
        cursor.y = Cursor::floor() - 5.0;
        assert!(!cursor.ensure_room(&mut surface, 5.0));
        assert!(cursor.ensure_room(&mut surface, 6.0));
        assert_eq!(surface.page_count(), 2);
        assert_eq!(cursor.y, MARGIN);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn wrap_never_overflows(input in "[ -~]{0,300}", width in 20.0f64..120.0) {
                for line in wrap(&input, 9.5, width) {
                    prop_assert!(text_width(&line, 9.5) <= width, "overflow: {line}");
                }
            }
        }
    }
}
