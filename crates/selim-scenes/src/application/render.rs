//! Drawing a frame of the adventure.

use selim_core::geometry::{Point, Rect};
use selim_core::render::{Color, Renderer};

use super::adventure::Adventure;

impl Adventure {
    /// Draws the scene backdrop, the dock and countdown during play, and
    /// the dialog box on top.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let viewport = self.viewport();
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        match self.scene().background() {
            Some(texture) => renderer.draw_image(texture, center, viewport.scale()),
            None => renderer.fill_rect(
                Rect::centered(center, viewport.width, viewport.height),
                Color::BLACK,
                1.0,
                None,
            ),
        }

        if self.scene().has_hud() {
            self.gauge().render(viewport, renderer);
            self.dock().render(self.ledger(), renderer);
        }

        self.presenter().render(renderer);
    }
}
