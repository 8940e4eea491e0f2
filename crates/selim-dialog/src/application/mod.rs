//! Application layer for the Dialog Sequencing context.

pub mod command_handlers;
pub mod query_handlers;
