//! What the adventure reports back to the host.

use std::time::Duration;

use selim_core::render::Color;

use super::scene::SceneId;

/// A camera effect the host should play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEffect {
    /// Fill the screen with `color`, fading out over `duration`.
    Flash {
        /// Fade length.
        duration: Duration,
        /// Flash colour.
        color: Color,
    },
    /// Jitter the camera.
    Shake {
        /// Shake length.
        duration: Duration,
        /// Displacement as a fraction of the viewport.
        intensity: f32,
    },
}

/// A notable result of handling one input.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneOutcome {
    /// A new scene began.
    SceneEntered(SceneId),
    /// Short floating text, e.g. a hint.
    Feedback(String),
    /// A camera effect.
    Camera(CameraEffect),
    /// An item entered the dock.
    ItemGranted(String),
    /// An item was used up.
    ItemConsumed(String),
    /// The player activated a held item.
    ItemSelected(String),
    /// A workshop machine was fixed; carries how many are fixed so far.
    PcRepaired(usize),
    /// The urgency countdown reached zero.
    UrgencyTimedOut,
}
