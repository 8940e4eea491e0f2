//! Selim — Typed-Text Presentation bounded context.
//!
//! Renders the node stream coming out of the dialog engine: speaker name,
//! a two-frame talking portrait and body text revealed one character at a
//! time, with an interrupt that reveals everything at once.

pub mod application;
pub mod domain;
