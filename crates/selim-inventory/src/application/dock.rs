//! On-screen inventory dock: geometry, hit testing and drawing.

use selim_core::geometry::{Point, Rect, Viewport};
use selim_core::render::{Color, Renderer, Stroke};

use crate::domain::aggregates::InventoryLedger;

const DOCK_WIDTH_RATIO: f32 = 0.6;
const DOCK_HEIGHT: f32 = 80.0;
const DOCK_BOTTOM_MARGIN: f32 = 10.0;
const DOCK_ALPHA: f32 = 0.8;
const SLOT_SIZE: f32 = 64.0;
const SLOT_SPACING: f32 = 80.0;

/// Dock geometry for one viewport. Recompute on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockLayout {
    /// Dock background.
    pub panel: Rect,
}

impl DockLayout {
    /// Computes the dock for `viewport`.
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            panel: Rect::centered(
                Point::new(
                    viewport.width / 2.0,
                    viewport.height - DOCK_HEIGHT / 2.0 - DOCK_BOTTOM_MARGIN,
                ),
                viewport.width * DOCK_WIDTH_RATIO,
                DOCK_HEIGHT,
            ),
        }
    }

    /// Centre of slot `index` when `count` items are docked. Slots are
    /// spread evenly around the dock centre.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slot_center(&self, index: usize, count: usize) -> Point {
        let start = -(count.saturating_sub(1) as f32) * SLOT_SPACING / 2.0;
        Point::new(
            self.panel.center.x + start + index as f32 * SLOT_SPACING,
            self.panel.center.y,
        )
    }

    /// Clickable area of slot `index` when `count` items are docked.
    #[must_use]
    pub fn slot_rect(&self, index: usize, count: usize) -> Rect {
        Rect::centered(self.slot_center(index, count), SLOT_SIZE, SLOT_SIZE)
    }

    /// The held item under `point`, if any.
    #[must_use]
    pub fn hit_test<'a>(&self, point: Point, ledger: &'a InventoryLedger) -> Option<&'a str> {
        let count = ledger.len();
        ledger
            .items()
            .enumerate()
            .find(|(index, _)| self.slot_rect(*index, count).contains(point))
            .map(|(_, key)| key)
    }

    /// Draws the dock and one icon per held item. Item textures share the
    /// item's key.
    pub fn render(&self, ledger: &InventoryLedger, renderer: &mut dyn Renderer) {
        renderer.fill_rect(
            self.panel,
            Color::CHARCOAL,
            DOCK_ALPHA,
            Some(Stroke {
                width: 2.0,
                color: Color::SLATE,
            }),
        );
        let count = ledger.len();
        for (index, key) in ledger.items().enumerate() {
            renderer.draw_image(key, self.slot_center(index, count), 1.0);
        }
    }
}

impl Default for DockLayout {
    fn default() -> Self {
        Self::for_viewport(Viewport::REFERENCE)
    }
}
