//! Dialog box geometry.

use selim_core::geometry::{Point, Rect, Viewport};

const PANEL_INSET: f32 = 20.0;
const PANEL_HEIGHT: f32 = 200.0;
const PANEL_BOTTOM_OFFSET: f32 = 110.0;
const PORTRAIT_X: f32 = 200.0;
const PORTRAIT_BOTTOM_OFFSET: f32 = 170.0;
const PORTRAIT_SCALE: f32 = 0.5;
const TEXT_X: f32 = 300.0;
const SPEAKER_BOTTOM_OFFSET: f32 = 190.0;
const BODY_GAP: f32 = 40.0;
const WRAP_MARGIN: f32 = 250.0;
const SPEAKER_FONT_SIZE: f32 = 24.0;
const BODY_FONT_SIZE: f32 = 20.0;
const MIN_FONT_SIZE: f32 = 10.0;

/// Where every part of the dialog box goes on a given viewport. Lengths are
/// authored against [`Viewport::REFERENCE`] and scaled by height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogLayout {
    /// Background panel.
    pub panel: Rect,
    /// Portrait centre.
    pub portrait_at: Point,
    /// Portrait scale.
    pub portrait_scale: f32,
    /// Speaker label top-left.
    pub speaker_at: Point,
    /// Body text top-left.
    pub text_at: Point,
    /// Body text wrap width.
    pub wrap_width: f32,
    /// Speaker label font size.
    pub speaker_font_size: f32,
    /// Body text font size.
    pub text_font_size: f32,
}

impl DialogLayout {
    /// Computes the layout for `viewport`.
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let s = viewport.scale();
        let (w, h) = (viewport.width, viewport.height);
        let speaker_at = Point::new(TEXT_X * s, h - SPEAKER_BOTTOM_OFFSET * s);

        Self {
            panel: Rect::centered(
                Point::new(w / 2.0, h - PANEL_BOTTOM_OFFSET * s),
                (w - 2.0 * PANEL_INSET * s).max(0.0),
                PANEL_HEIGHT * s,
            ),
            portrait_at: Point::new(PORTRAIT_X * s, h - PORTRAIT_BOTTOM_OFFSET * s),
            portrait_scale: PORTRAIT_SCALE * s,
            speaker_at,
            text_at: Point::new(speaker_at.x, speaker_at.y + BODY_GAP * s),
            wrap_width: (w - WRAP_MARGIN * s).max(0.0),
            speaker_font_size: (SPEAKER_FONT_SIZE * s).max(MIN_FONT_SIZE),
            text_font_size: (BODY_FONT_SIZE * s).max(MIN_FONT_SIZE),
        }
    }
}

impl Default for DialogLayout {
    fn default() -> Self {
        Self::for_viewport(Viewport::REFERENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_reference_viewport_matches_authored_geometry() {
        // Act
        let layout = DialogLayout::for_viewport(Viewport::REFERENCE);

        // Assert
        assert!(close(layout.panel.center.x, 1024.0));
        assert!(close(layout.panel.center.y, 914.0));
        assert!(close(layout.panel.width, 2008.0));
        assert!(close(layout.panel.height, 200.0));
        assert!(close(layout.portrait_at.x, 200.0));
        assert!(close(layout.portrait_at.y, 854.0));
        assert!(close(layout.speaker_at.y, 834.0));
        assert!(close(layout.text_at.y, 874.0));
        assert!(close(layout.wrap_width, 1798.0));
        assert!(close(layout.speaker_font_size, 24.0));
    }

    #[test]
    fn test_layout_scales_with_viewport() {
        // Act
        let layout = DialogLayout::for_viewport(Viewport::new(1024.0, 512.0));

        // Assert
        assert!(close(layout.panel.height, 100.0));
        assert!(close(layout.panel.width, 1004.0));
        assert!(close(layout.panel.center.y, 457.0));
        assert!(close(layout.portrait_scale, 0.25));
        assert!(close(layout.text_font_size, 10.0));
    }

    #[test]
    fn test_tiny_viewport_keeps_readable_fonts() {
        let layout = DialogLayout::for_viewport(Viewport::new(320.0, 160.0));

        assert!(close(layout.speaker_font_size, MIN_FONT_SIZE));
        assert!(close(layout.text_font_size, MIN_FONT_SIZE));
        assert!(layout.wrap_width >= 0.0);
    }
}
