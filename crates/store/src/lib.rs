//! Storage for GNOME custom keyboard shortcuts.
//!
//! This crate reads and writes the custom keybinding records kept under the
//! `org.gnome.settings-daemon.plugins.media-keys` schema, validates
//! accelerator strings, and selects a settings backend from configuration.

pub mod backend;
pub mod binding;
pub mod constants;
mod error;
mod loader;
mod store;
mod types;

pub use backend::{FileBackend, GsettingsBackend, SettingsBackend, SettingsRef};
#[cfg(any(feature = "test-utils", test))]
pub use backend::MemoryBackend;
pub use binding::{BindingError, Modifier, ParsedBinding, is_valid_binding, parse_binding};
pub use error::StoreError;
pub use loader::{
    BackendKind, ConfigError, ENV_BACKEND, ENV_GSETTINGS_PROGRAM, ENV_STORE_PATH, StoreConfig,
    StoreConfigLoader, default_store_path, env_var_or_none,
};
pub use store::{BindingStore, allocate_identifier};
pub use types::{BindingRecord, identifier_for};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
