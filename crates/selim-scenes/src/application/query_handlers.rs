//! Query handlers for scene progression.

use selim_dialog::application::query_handlers::{DialogView, get_dialog_view};
use selim_inventory::application::query_handlers::get_inventory_view;
use serde::Serialize;

use super::adventure::Adventure;
use crate::domain::progress::ProgressFlags;
use crate::domain::scene::SceneId;

/// Read-only snapshot of a playthrough.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdventureView {
    /// Scene being played.
    pub scene: SceneId,
    /// Puzzle completion flags.
    pub flags: ProgressFlags,
    /// Held items in dock order.
    pub items: Vec<String>,
    /// Countdown label, `MM:SS`.
    pub time_left: String,
    /// Dialog engine state.
    pub dialog: DialogView,
    /// Text currently on screen, if the dialog box is showing.
    pub displayed_text: Option<String>,
}

/// Snapshots `adventure`.
#[must_use]
pub fn get_adventure_view(adventure: &Adventure) -> AdventureView {
    let presenter = adventure.presenter();
    AdventureView {
        scene: adventure.scene(),
        flags: adventure.flags(),
        items: get_inventory_view(adventure.ledger()).items,
        time_left: adventure.gauge().label(),
        dialog: get_dialog_view(adventure.engine()),
        displayed_text: presenter
            .is_visible()
            .then(|| presenter.displayed_text().to_owned()),
    }
}
