//! Application layer for the Inventory Ledger context.

pub mod command_handlers;
pub mod dock;
pub mod query_handlers;
