//! Player input, as commands routed by the adventure.

use selim_core::command::Command;
use selim_core::geometry::{Point, Viewport};
use selim_core::scheduler::TimerHandle;

use super::scene::SceneObject;

/// Everything the host can feed the adventure.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Click or space bar: finish the typing animation, or move to the
    /// next line once the text is fully shown.
    Advance,
    /// Pointer-down at a screen position. Advances a visible dialog,
    /// otherwise selects the dock item under the pointer.
    PointerDown(Point),
    /// Click on a scene object.
    Interact(SceneObject),
    /// Activate a held item.
    SelectItem(String),
    /// The display surface changed size.
    Resize(Viewport),
    /// A timer scheduled by the adventure fired.
    TimerFired(TimerHandle),
}

impl Command for Input {
    fn command_type(&self) -> &'static str {
        match self {
            Self::Advance => "scene.advance",
            Self::PointerDown(_) => "scene.pointer_down",
            Self::Interact(_) => "scene.interact",
            Self::SelectItem(_) => "scene.select_item",
            Self::Resize(_) => "scene.resize",
            Self::TimerFired(_) => "scene.timer_fired",
        }
    }
}
