//! Configuration loader for the settings backend.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and `GCKB_*` environment variables.
//! - Provide a builder-pattern `StoreConfigLoader` for CLI overrides.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Reading or writing keybindings (see `store`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod store_config;

pub use builder::{StoreConfigLoader, default_store_path};
pub use env::{ENV_BACKEND, ENV_GSETTINGS_PROGRAM, ENV_STORE_PATH, env_var_or_none};
pub use error::ConfigError;
pub use store_config::{BackendKind, StoreConfig};

#[cfg(test)]
mod tests;
