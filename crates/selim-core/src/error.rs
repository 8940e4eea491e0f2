//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Engine operations never surface these: a missing sequence or dataset
/// degrades to a logged no-op. They are returned by dataset ingestion and
/// strict validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The dialog dataset could not be located.
    #[error("dialog dataset not found: {0}")]
    DatasetMissing(String),

    /// A node's `next` points at an id absent from its sequence.
    #[error("broken dialog graph in {sequence}: node {node_id} points at missing node {next}")]
    BrokenDialogGraph {
        /// The sequence containing the defect.
        sequence: String,
        /// The node whose `next` dangles.
        node_id: i64,
        /// The id that could not be resolved.
        next: i64,
    },

    /// Two nodes in one sequence share an id.
    #[error("duplicate node id {node_id} in dialog sequence {sequence}")]
    DuplicateNodeId {
        /// The sequence containing the defect.
        sequence: String,
        /// The repeated id.
        node_id: i64,
    },

    /// A sequence has no nodes to start from.
    #[error("dialog sequence is empty: {0}")]
    EmptySequence(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An I/O or parse failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
