//! Settings store resolution for command execution.
//!
//! Responsibilities:
//! - Merge `GCKB_*` environment variables with the `--backend` and
//!   `--store-file` flags.
//! - Open the selected backend and wrap it in a `BindingStore`.
//!
//! Does NOT handle:
//! - `.env` loading (done in `main()` before parsing).
//!
//! Invariants:
//! - Flags take precedence over environment variables.
//! - Blank `--store-file` values are ignored so the environment still applies.

use anyhow::{Context, Result};
use gckb_store::{BindingStore, SettingsBackend, StoreConfigLoader};

use crate::args::Cli;

/// Store handle passed to every verb.
pub(crate) type Store = BindingStore<Box<dyn SettingsBackend>>;

/// Resolves the backend from the environment and flags and opens it.
pub(crate) fn open_store(cli: &Cli) -> Result<Store> {
    let mut loader = StoreConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(kind) = cli.backend {
        loader = loader.with_backend(kind);
    }
    if let Some(ref path) = cli.store_file
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_store_path(path.clone());
    }

    let config = loader
        .build()
        .context("Failed to build store configuration")?;
    let backend = config
        .open()
        .with_context(|| format!("Failed to open {} settings backend", config.kind()))?;

    Ok(BindingStore::new(backend))
}
