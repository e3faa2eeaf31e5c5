//! Error types for the settings store.
//!
//! Responsibilities:
//! - Define error variants for backend I/O and store operations.
//! - Keep enough context (program, path, index) to make failures actionable.
//!
//! Does NOT handle:
//! - Configuration errors (see `ConfigError`).
//! - Mapping errors to process exit codes (done by the CLI).

use std::path::PathBuf;

use thiserror::Error;

use crate::backend::gvariant::GVariantError;

/// Errors that can occur while reading or writing custom keybindings.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program} {args}' failed ({status}): {stderr}")]
    CommandFailed {
        program: String,
        args: String,
        status: String,
        stderr: String,
    },

    #[error("'{program}' produced output that is not valid UTF-8")]
    InvalidOutput { program: String },

    #[error("Failed to parse settings value: {0}")]
    GVariant(#[from] GVariantError),

    #[error("Failed to read settings store at {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings store at {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings store: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Index out of bounds: '{index}'.")]
    IndexOutOfBounds { index: usize, len: usize },
}
