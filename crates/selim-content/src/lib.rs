//! Selim — dialog dataset ingestion.
//!
//! Reads the authored dialog document (JSON or YAML), checks its graph and
//! fingerprints it before the engine sees it.

pub mod application;
pub mod domain;
