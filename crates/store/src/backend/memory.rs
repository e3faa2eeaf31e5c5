//! In-memory settings backend for tests.

use super::tree::SettingsTree;
use super::{SettingsBackend, SettingsRef};
use crate::error::StoreError;

/// A settings backend that lives only in memory.
///
/// Counts writes and syncs so tests can assert that a rejected operation
/// never touched the store.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    tree: SettingsTree,
    writes: usize,
    syncs: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_*` and `reset` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Number of `sync` calls so far.
    pub fn syncs(&self) -> usize {
        self.syncs
    }

    /// Whether any string value is stored under `at`.
    pub fn has_strings(&self, at: SettingsRef<'_>) -> bool {
        self.tree.strings.contains_key(&at.to_string())
    }
}

impl SettingsBackend for MemoryBackend {
    fn get_string(&self, at: SettingsRef<'_>, key: &str) -> Result<String, StoreError> {
        Ok(self.tree.get_string(at, key))
    }

    fn set_string(
        &mut self,
        at: SettingsRef<'_>,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        self.writes += 1;
        self.tree.set_string(at, key, value);
        Ok(())
    }

    fn get_strv(&self, at: SettingsRef<'_>, key: &str) -> Result<Vec<String>, StoreError> {
        Ok(self.tree.get_strv(at, key))
    }

    fn set_strv(
        &mut self,
        at: SettingsRef<'_>,
        key: &str,
        value: &[String],
    ) -> Result<(), StoreError> {
        self.writes += 1;
        self.tree.set_strv(at, key, value);
        Ok(())
    }

    fn reset(&mut self, at: SettingsRef<'_>, key: &str) -> Result<(), StoreError> {
        self.writes += 1;
        self.tree.reset(at, key);
        Ok(())
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        self.syncs += 1;
        Ok(())
    }
}
