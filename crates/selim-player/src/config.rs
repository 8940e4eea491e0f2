//! Player configuration, read from the environment.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use selim_content::domain::format::ValidationMode;
use selim_core::geometry::Viewport;

use crate::error::AppError;

/// Dialog dataset location.
pub const DIALOGS_VAR: &str = "SELIM_DIALOGS";
/// Strict dataset validation switch.
pub const STRICT_DIALOGS_VAR: &str = "SELIM_STRICT_DIALOGS";
/// Frame interval in milliseconds.
pub const FRAME_MS_VAR: &str = "SELIM_FRAME_MS";
/// Initial viewport, `WIDTHxHEIGHT`.
pub const VIEWPORT_VAR: &str = "SELIM_VIEWPORT";
/// Log output format.
pub const LOG_FORMAT_VAR: &str = "SELIM_LOG_FORMAT";

const DEFAULT_DIALOGS: &str = "assets/data/dialogs.json";
const DEFAULT_FRAME_MS: u64 = 16;

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "{LOG_FORMAT_VAR} must be pretty or json, got {other}"
            ))),
        }
    }
}

/// Everything the player needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    /// Dialog dataset path.
    pub dialogs_path: PathBuf,
    /// Dataset validation policy.
    pub validation: ValidationMode,
    /// Interval between two timer-queue advances.
    pub frame_interval: Duration,
    /// Initial display size.
    pub viewport: Viewport,
    /// Log output format.
    pub log_format: LogFormat,
}

impl PlayerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable if set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let dialogs_path = lookup(DIALOGS_VAR)
            .map_or_else(|| PathBuf::from(DEFAULT_DIALOGS), PathBuf::from);

        let validation = match lookup(STRICT_DIALOGS_VAR).as_deref() {
            None | Some("false" | "0") => ValidationMode::Lenient,
            Some("true" | "1") => ValidationMode::Strict,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "{STRICT_DIALOGS_VAR} must be true or false, got {other}"
                )));
            }
        };

        let frame_ms: u64 = match lookup(FRAME_MS_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| {
                    AppError::Config(format!("{FRAME_MS_VAR} must be a positive integer: {raw}"))
                })?,
            None => DEFAULT_FRAME_MS,
        };

        let viewport = match lookup(VIEWPORT_VAR) {
            Some(raw) => parse_viewport(&raw)?,
            None => Viewport::REFERENCE,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            dialogs_path,
            validation,
            frame_interval: Duration::from_millis(frame_ms),
            viewport,
            log_format,
        })
    }
}

/// Parses `WIDTHxHEIGHT` into a viewport with positive sides.
///
/// # Errors
///
/// Returns `AppError::Config` if the text is not two positive numbers
/// separated by `x`.
pub fn parse_viewport(raw: &str) -> Result<Viewport, AppError> {
    let invalid = || AppError::Config(format!("viewport must look like 2048x1024, got {raw}"));
    let (width, height) = raw.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: f32 = width.trim().parse().map_err(|_| invalid())?;
    let height: f32 = height.trim().parse().map_err(|_| invalid())?;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(invalid());
    }
    Ok(Viewport::new(width, height))
}
