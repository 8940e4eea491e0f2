//! Selim player — error types.

use selim_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the player.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable holds an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The dialog dataset could not be ingested.
    #[error("content error: {0}")]
    Content(#[from] DomainError),

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
