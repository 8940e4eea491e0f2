//! Selim terminal player.
//!
//! Configuration, the line-command vocabulary and a text renderer for
//! playing the adventure in a terminal.

pub mod command;
pub mod config;
pub mod error;
pub mod terminal;
