//! Application layer for dataset ingestion.

pub mod ingest;
pub mod loader;
