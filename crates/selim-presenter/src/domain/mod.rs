//! Domain model for the Typed-Text Presentation context.

pub mod aggregates;
pub mod layout;
pub mod portrait;
