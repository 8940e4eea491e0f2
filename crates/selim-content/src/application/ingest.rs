//! Parsing and validation of dialog documents.

use selim_core::error::DomainError;
use selim_dialog::domain::model::DialogSet;
use tracing::{info, instrument, warn};

use crate::domain::dataset::{IngestedDialogs, version_hash};
use crate::domain::format::{DialogFormat, ValidationMode};

/// Parses a dialog document and checks its graph.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the document does not match the
/// authoring format. Under `ValidationMode::Strict` the first graph defect
/// is returned as its `DomainError` counterpart.
#[instrument(skip(source), fields(bytes = source.len()))]
pub fn parse_dialogs(
    source: &str,
    format: DialogFormat,
    mode: ValidationMode,
) -> Result<IngestedDialogs, DomainError> {
    let set: DialogSet = match format {
        DialogFormat::Json => serde_json::from_str(source)
            .map_err(|e| DomainError::Infrastructure(format!("invalid dialog json: {e}")))?,
        DialogFormat::Yaml => serde_yaml::from_str(source)
            .map_err(|e| DomainError::Infrastructure(format!("invalid dialog yaml: {e}")))?,
    };

    let defects = set.defects();
    if let (ValidationMode::Strict, Some(defect)) = (mode, defects.first()) {
        return Err(defect.clone().into());
    }
    for defect in &defects {
        warn!(%defect, "dialog graph defect");
    }

    let ingested = IngestedDialogs {
        version_hash: version_hash(source.as_bytes()),
        defects,
        set,
    };
    info!(
        sequences = ingested.set.len(),
        defects = ingested.defects.len(),
        version_hash = %ingested.version_hash,
        "dialog dataset ingested"
    );
    Ok(ingested)
}

/// Serializes `set` back to the authoring JSON.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if serialization fails.
pub fn to_json(set: &DialogSet) -> Result<String, DomainError> {
    serde_json::to_string_pretty(set)
        .map_err(|e| DomainError::Infrastructure(format!("failed to serialize dialogs: {e}")))
}
