//! Selim — Dialog Sequencing bounded context.
//!
//! Owns the dialog dataset and the branching-text state machine shared by
//! every scene: start a sequence by key, walk its `next` chain node by
//! node, and announce start, update and end to whoever renders it.

pub mod application;
pub mod domain;
