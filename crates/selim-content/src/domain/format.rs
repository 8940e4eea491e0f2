//! Source formats and validation policy.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use selim_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Serialization of a dialog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogFormat {
    /// JSON, the format the game ships with.
    #[default]
    Json,
    /// YAML, for hand authoring.
    Yaml,
}

impl DialogFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the extension is missing or not
    /// one of `json`, `yaml` or `yml`.
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                DomainError::Validation(format!("no file extension on {}", path.display()))
            })?;
        extension.parse()
    }
}

impl FromStr for DialogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(DomainError::Validation(format!(
                "unsupported dialog format: {other}"
            ))),
        }
    }
}

impl fmt::Display for DialogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// How graph defects are treated at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Accept the dataset and report defects as warnings.
    #[default]
    Lenient,
    /// Reject the dataset on its first defect.
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DialogFormat::from_path(Path::new("assets/data/dialogs.json")),
            Ok(DialogFormat::Json)
        );
        assert_eq!(
            DialogFormat::from_path(Path::new("dialogs.YML")),
            Ok(DialogFormat::Yaml)
        );
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = DialogFormat::from_path(Path::new("dialogs.toml"));

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        let result = DialogFormat::from_path(Path::new("dialogs"));

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_lenient_is_default_mode() {
        assert_eq!(ValidationMode::default(), ValidationMode::Lenient);
    }
}
