//! Selim — scene progression.
//!
//! Drives the adventure from the intro to the server room: owns the dialog
//! engine, the dialog box, the inventory and the urgency countdown, routes
//! player input between them and reports what the host should show.

pub mod application;
pub mod domain;
