//! Draws the dialog box through the host renderer.

use selim_core::render::{Color, Renderer, Stroke, TextStyle};

use crate::domain::aggregates::DialogPresenter;

const PANEL_ALPHA: f32 = 0.8;
const PANEL_STROKE_WIDTH: f32 = 2.0;

impl DialogPresenter {
    /// Draws panel, portrait, speaker and revealed text. Draws nothing
    /// while hidden.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        if !self.is_visible() {
            return;
        }
        let layout = self.layout();

        renderer.fill_rect(
            layout.panel,
            Color::BLACK,
            PANEL_ALPHA,
            Some(Stroke {
                width: PANEL_STROKE_WIDTH,
                color: Color::WHITE,
            }),
        );

        if let Some(texture) = self.portrait_texture() {
            renderer.draw_image(&texture, layout.portrait_at, layout.portrait_scale);
        }

        renderer.draw_text(
            self.speaker(),
            layout.speaker_at,
            &TextStyle {
                font_size: layout.speaker_font_size,
                color: Color::YELLOW,
                bold: true,
                wrap_width: None,
            },
        );
        renderer.draw_text(
            self.displayed_text(),
            layout.text_at,
            &TextStyle {
                font_size: layout.text_font_size,
                color: Color::WHITE,
                bold: false,
                wrap_width: Some(layout.wrap_width),
            },
        );
    }
}
