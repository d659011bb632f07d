//! CLI error types

use capital_core::types::ExposureError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `capital` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid exposure ({} defect(s)): {}", .0.len(), join_defects(.0))]
    Validation(Vec<ExposureError>),

    #[error(transparent)]
    Input(#[from] anyhow::Error),
}

fn join_defects(defects: &[ExposureError]) -> String {
    defects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
