//! Selim — Inventory Ledger bounded context.
//!
//! The set of items the player holds, used by scene logic to gate puzzles,
//! and the on-screen dock that lets the player pick one.

pub mod application;
pub mod domain;
