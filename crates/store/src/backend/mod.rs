//! Settings backends.
//!
//! Responsibilities:
//! - Define the `SettingsBackend` contract the binding store is written against.
//! - Provide the gsettings-driven backend used on a real desktop.
//! - Provide a JSON file backend and (for tests) an in-memory backend.
//!
//! Does NOT handle:
//! - Custom keybinding semantics such as identifier allocation (see `store`).
//!
//! Invariants:
//! - Reading an unset string yields `""`; reading an unset list yields `[]`.
//! - `reset` returns a key to its default; the settings object itself may remain.
//! - After `sync` returns, every earlier write has been handed to durable storage.

use std::fmt;

use crate::error::StoreError;

mod file;
mod gsettings;
pub mod gvariant;
#[cfg(any(feature = "test-utils", test))]
mod memory;
mod tree;

pub use file::FileBackend;
pub use gsettings::GsettingsBackend;
#[cfg(any(feature = "test-utils", test))]
pub use memory::MemoryBackend;

/// Address of a settings object: a schema, plus a path for relocatable schemas.
///
/// Displays in the `SCHEMA[:PATH]` form the `gsettings` tool accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsRef<'a> {
    pub schema: &'a str,
    pub path: Option<&'a str>,
}

impl<'a> SettingsRef<'a> {
    /// A non-relocatable schema at its fixed path.
    pub const fn schema(schema: &'a str) -> Self {
        Self { schema, path: None }
    }

    /// A relocatable schema instantiated at `path`.
    pub const fn relocatable(schema: &'a str, path: &'a str) -> Self {
        Self {
            schema,
            path: Some(path),
        }
    }
}

impl fmt::Display for SettingsRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path {
            Some(path) => write!(f, "{}:{}", self.schema, path),
            None => f.write_str(self.schema),
        }
    }
}

/// A hierarchical key-value settings service.
pub trait SettingsBackend {
    /// Read a string key.
    fn get_string(&self, at: SettingsRef<'_>, key: &str) -> Result<String, StoreError>;

    /// Write a string key.
    fn set_string(&mut self, at: SettingsRef<'_>, key: &str, value: &str)
    -> Result<(), StoreError>;

    /// Read a list-of-strings key, preserving stored order.
    fn get_strv(&self, at: SettingsRef<'_>, key: &str) -> Result<Vec<String>, StoreError>;

    /// Write a list-of-strings key.
    fn set_strv(
        &mut self,
        at: SettingsRef<'_>,
        key: &str,
        value: &[String],
    ) -> Result<(), StoreError>;

    /// Restore a key to its default value.
    fn reset(&mut self, at: SettingsRef<'_>, key: &str) -> Result<(), StoreError>;

    /// Block until pending writes are durable.
    fn sync(&mut self) -> Result<(), StoreError>;
}

impl<B: SettingsBackend + ?Sized> SettingsBackend for Box<B> {
    fn get_string(&self, at: SettingsRef<'_>, key: &str) -> Result<String, StoreError> {
        (**self).get_string(at, key)
    }

    fn set_string(
        &mut self,
        at: SettingsRef<'_>,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        (**self).set_string(at, key, value)
    }

    fn get_strv(&self, at: SettingsRef<'_>, key: &str) -> Result<Vec<String>, StoreError> {
        (**self).get_strv(at, key)
    }

    fn set_strv(
        &mut self,
        at: SettingsRef<'_>,
        key: &str,
        value: &[String],
    ) -> Result<(), StoreError> {
        (**self).set_strv(at, key, value)
    }

    fn reset(&mut self, at: SettingsRef<'_>, key: &str) -> Result<(), StoreError> {
        (**self).reset(at, key)
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        (**self).sync()
    }
}
