//! Loading dialog documents from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use selim_core::error::DomainError;
use tracing::{instrument, warn};

use super::ingest::parse_dialogs;
use crate::domain::dataset::IngestedDialogs;
use crate::domain::format::{DialogFormat, ValidationMode};

/// Reads and ingests the dialog document at `path`. The format follows the
/// file extension.
///
/// # Errors
///
/// Returns `DomainError::DatasetMissing` if the file does not exist,
/// `DomainError::Infrastructure` if it cannot be read or parsed, and any
/// error [`parse_dialogs`] returns.
#[instrument(skip_all, fields(path = %path.display(), ?mode))]
pub fn load_dialogs_from_path(
    path: &Path,
    mode: ValidationMode,
) -> Result<IngestedDialogs, DomainError> {
    let format = DialogFormat::from_path(path)?;
    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::DatasetMissing(path.display().to_string()),
        _ => DomainError::Infrastructure(format!("failed to read {}: {e}", path.display())),
    })?;
    parse_dialogs(&source, format, mode)
}

/// Like [`load_dialogs_from_path`], but a missing dataset is not an error:
/// it is logged and `None` is returned so the engine runs without dialogs.
///
/// # Errors
///
/// Every failure other than `DomainError::DatasetMissing`.
pub fn load_dialogs_or_none(
    path: &Path,
    mode: ValidationMode,
) -> Result<Option<IngestedDialogs>, DomainError> {
    match load_dialogs_from_path(path, mode) {
        Ok(ingested) => Ok(Some(ingested)),
        Err(DomainError::DatasetMissing(missing)) => {
            warn!(path = %missing, "dialog dataset missing, dialogs disabled");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
