//! Selim Core — shared abstractions.
//!
//! This crate defines the traits and types every bounded context depends
//! on: errors, event envelopes, the clock, the host timer system and the
//! rendering collaborator. It holds no scene or dialog logic.

pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod geometry;
pub mod render;
pub mod scheduler;
