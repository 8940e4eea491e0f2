//! A parsed, fingerprinted dialog dataset.

use selim_dialog::domain::model::{DialogSet, GraphDefect};
use sha2::{Digest, Sha256};

/// Result of ingesting a dialog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedDialogs {
    /// The sequences, ready for the engine.
    pub set: DialogSet,
    /// Lowercase hex SHA-256 of the source bytes.
    pub version_hash: String,
    /// Defects tolerated under lenient validation.
    pub defects: Vec<GraphDefect>,
}

impl IngestedDialogs {
    /// Returns true if the dataset loaded without defects.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }

    /// Hands the sequences over to the engine.
    #[must_use]
    pub fn into_set(self) -> DialogSet {
        self.set
    }
}

/// Lowercase hex SHA-256 digest of `source`.
#[must_use]
pub fn version_hash(source: &[u8]) -> String {
    hex::encode(Sha256::digest(source))
}
