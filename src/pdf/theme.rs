//! Print palette and type scale for the PDF report.

use crate::cards::{AMBER, GRAY, GREEN, ORANGE, RED};
use crate::Color;

/// Body text.
pub const INK: Color = Color::new(24, 24, 27);
/// Secondary text: captions, footers, metadata.
pub const MUTED: Color = Color::new(113, 113, 122);
/// Brand accent for headings and rules.
pub const BRAND: Color = Color::new(37, 99, 235);
/// Light fill behind score cards and callouts.
pub const PANEL: Color = Color::new(241, 245, 249);
/// Hairline rules.
pub const RULE: Color = Color::new(203, 213, 225);

// Type scale in points.
pub const SIZE_TITLE: f64 = 26.0;
pub const SIZE_H1: f64 = 16.0;
pub const SIZE_H2: f64 = 12.0;
pub const SIZE_BODY: f64 = 9.5;
pub const SIZE_SMALL: f64 = 7.5;

/// Score color shared with the dashboard tier chips.
pub fn score_color(score: f64) -> Color {
    if score >= 80.0 {
        GREEN
    } else if score >= 60.0 {
        AMBER
    } else if score >= 40.0 {
        ORANGE
    } else if score > 0.0 {
        RED
    } else {
        GRAY
    }
}
