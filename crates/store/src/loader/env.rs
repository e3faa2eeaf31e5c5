//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `GCKB_*` environment variables.
//! - Apply their values to a `StoreConfigLoader`.
//!
//! Does NOT handle:
//! - Building the final `StoreConfig` (see builder.rs).
//! - .env file loading (handled by `StoreConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue`.

use std::path::PathBuf;

use super::builder::StoreConfigLoader;
use super::error::ConfigError;

/// Selects the settings backend (`gsettings` or `file`).
pub const ENV_BACKEND: &str = "GCKB_BACKEND";

/// Path of the JSON store used by the file backend.
pub const ENV_STORE_PATH: &str = "GCKB_STORE_PATH";

/// Executable used by the gsettings backend.
pub const ENV_GSETTINGS_PROGRAM: &str = "GCKB_GSETTINGS_BIN";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut StoreConfigLoader) -> Result<(), ConfigError> {
    if let Some(backend) = env_var_or_none(ENV_BACKEND) {
        let kind = backend.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_BACKEND.to_string(),
            message: format!("must be 'gsettings' or 'file' (got '{}')", backend),
        })?;
        loader.set_backend(Some(kind));
    }
    if let Some(path) = env_var_or_none(ENV_STORE_PATH) {
        loader.set_store_path(Some(PathBuf::from(path)));
    }
    if let Some(program) = env_var_or_none(ENV_GSETTINGS_PROGRAM) {
        loader.set_gsettings_program(Some(PathBuf::from(program)));
    }
    Ok(())
}
