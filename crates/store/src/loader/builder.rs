//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `StoreConfigLoader` merging defaults, environment and CLI flags.
//! - Build the final `StoreConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Opening the selected backend (see `StoreConfig::open`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - The default store path is only resolved when the file backend is selected.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::store_config::{BackendKind, StoreConfig};
use crate::constants::{DEFAULT_GSETTINGS_PROGRAM, STORE_FILE_NAME};

/// Configuration loader that builds a `StoreConfig` from the environment and flags.
#[derive(Debug, Default)]
pub struct StoreConfigLoader {
    backend: Option<BackendKind>,
    store_path: Option<PathBuf>,
    gsettings_program: Option<PathBuf>,
}

impl StoreConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not
    /// loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply `GCKB_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Select the settings backend.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the JSON store path used by the file backend.
    pub fn with_store_path(mut self, path: PathBuf) -> Self {
        self.store_path = Some(path);
        self
    }

    /// Set the executable used by the gsettings backend.
    pub fn with_gsettings_program(mut self, program: PathBuf) -> Self {
        self.gsettings_program = Some(program);
        self
    }

    pub(crate) fn set_backend(&mut self, backend: Option<BackendKind>) {
        self.backend = backend;
    }

    pub(crate) fn set_store_path(&mut self, path: Option<PathBuf>) {
        self.store_path = path;
    }

    pub(crate) fn set_gsettings_program(&mut self, program: Option<PathBuf>) {
        self.gsettings_program = program;
    }

    /// Build the final configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::ConfigDirUnavailable` if the file backend is
    /// selected without a store path and no config directory can be found.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let config = match self.backend.unwrap_or_default() {
            BackendKind::Gsettings => StoreConfig::Gsettings {
                program: self
                    .gsettings_program
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_GSETTINGS_PROGRAM)),
            },
            BackendKind::File => StoreConfig::File {
                path: match self.store_path {
                    Some(path) => path,
                    None => default_store_path()?,
                },
            },
        };

        tracing::debug!(config = ?config, "Store configuration resolved");
        Ok(config)
    }
}

/// Returns the default path of the JSON settings store.
///
/// - Linux: `~/.config/gckb/store.json`
/// - macOS: `~/Library/Application Support/gckb/store.json`
pub fn default_store_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "gckb").ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory found".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(STORE_FILE_NAME))
}
