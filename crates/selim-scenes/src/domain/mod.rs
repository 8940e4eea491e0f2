//! Domain model for scene progression.

pub mod commands;
pub mod events;
pub mod progress;
pub mod scene;
pub mod urgency;
