//! Rendering collaborator contract.
//!
//! Widgets describe themselves through [`Renderer`]; the host decides
//! how rectangles, images and text actually reach the screen.

use crate::geometry::{Point, Rect};

/// A 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self(0x00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xff_ffff);
    /// Speaker-name yellow.
    pub const YELLOW: Self = Self(0xff_ff00);
    /// Dock grey.
    pub const CHARCOAL: Self = Self(0x33_3333);
    /// Dock border grey.
    pub const SLATE: Self = Self(0x55_5555);
    /// Urgency gauge background.
    pub const CRIMSON: Self = Self(0x99_0000);
    /// Pure red.
    pub const RED: Self = Self(0xff_0000);
    /// Pure green.
    pub const GREEN: Self = Self(0x00_ff00);
    /// Pure blue.
    pub const BLUE: Self = Self(0x00_00ff);

    /// Formats the colour as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

/// Outline drawn around a filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line width in pixels.
    pub width: f32,
    /// Line colour.
    pub color: Color,
}

/// Styling for a text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f32,
    /// Fill colour.
    pub color: Color,
    /// Bold weight.
    pub bold: bool,
    /// Width at which lines wrap, if any.
    pub wrap_width: Option<f32>,
}

/// Drawing surface provided by the host engine.
pub trait Renderer {
    /// Fills a rectangle, optionally outlined.
    fn fill_rect(&mut self, rect: Rect, fill: Color, alpha: f32, stroke: Option<Stroke>);

    /// Draws the texture registered under `texture` centred on `at`.
    fn draw_image(&mut self, texture: &str, at: Point, scale: f32);

    /// Draws `text` with its top-left corner at `at`.
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_formats_as_padded_hex() {
        assert_eq!(Color::YELLOW.to_hex(), "#ffff00");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color(0x0a_0b0c).to_hex(), "#0a0b0c");
    }
}
