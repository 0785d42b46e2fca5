//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apex-core                    this crate                 main()         │
//! │  ─────────                    ──────────                 ──────         │
//! │  ValidationError ──┐                                                    │
//! │                    ├──► CoreError ──► CliError ──► anyhow ──► stderr   │
//! │  CoreError ────────┘                     ▲                              │
//! │                                          │                              │
//! │  std::io / serde_json / ConfigError ─────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use apex_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Business rule failure from apex-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading or writing a draft / invoice file failed.
    #[error("Cannot access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold the expected JSON record.
    #[error("Invalid JSON in {}: {}", .path.display(), .source)]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A command-line amount that is not a decimal number.
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        CliError::InvalidJson {
            path: path.into(),
            source,
        }
    }

    /// Process exit code: 2 for input the user can fix, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_)
            | CliError::InvalidAmount(_)
            | CliError::InvalidJson { .. }
            | CliError::Config(_)
            | CliError::Core(CoreError::Validation(_))
            | CliError::Core(CoreError::LineItemNotFound(_))
            | CliError::Core(CoreError::LastLineItem)
            | CliError::Core(CoreError::NegativeAmount { .. })
            | CliError::Core(CoreError::AmountTooLarge { .. }) => 2,
            _ => 1,
        }
    }
}

/// Convenience type alias for command results.
pub type CliResult<T> = Result<T, CliError>;
