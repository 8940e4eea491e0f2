//! Domain model for the Dialog Sequencing context.

pub mod aggregates;
pub mod commands;
pub mod events;
pub mod model;
