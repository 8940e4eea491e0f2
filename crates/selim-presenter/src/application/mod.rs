//! Application layer for the Typed-Text Presentation context.

pub mod listener;
pub mod render;
