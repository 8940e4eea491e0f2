//! Domain model for dataset ingestion.

pub mod dataset;
pub mod format;
