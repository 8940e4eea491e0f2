//! Application layer for scene progression.

pub mod adventure;
pub mod listener;
pub mod query_handlers;
pub mod render;
