//! Domain model for the Inventory Ledger context.

pub mod aggregates;
pub mod commands;
pub mod events;
