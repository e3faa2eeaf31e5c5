//! JSON file settings backend.
//!
//! Responsibilities:
//! - Keep a whole settings tree in a single JSON file.
//! - Write the file atomically on `sync`.
//! - Back up a corrupt file before replacing it.
//!
//! Does NOT handle:
//! - Choosing the file location (see `StoreConfigLoader`).
//! - Locking against other writers.
//!
//! Invariants:
//! - Writes are buffered in memory until `sync`.
//! - Writes are atomic (temp file + rename).
//! - A corrupt file is renamed to `.corrupt.{timestamp}` and never deleted.

use std::path::{Path, PathBuf};

use super::tree::SettingsTree;
use super::{SettingsBackend, SettingsRef};
use crate::error::StoreError;

/// Settings backend persisted as a JSON document on disk.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    tree: SettingsTree,
    dirty: bool,
}

impl FileBackend {
    /// Opens the store file at `path`, starting empty if it does not exist.
    ///
    /// If the file exists but cannot be parsed, it is backed up with a
    /// `.corrupt.{timestamp}` extension and an empty tree is used instead.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let tree = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|source| {
                StoreError::FileRead {
                    path: path.clone(),
                    source,
                }
            })?;

            match serde_json::from_str::<SettingsTree>(&content) {
                Ok(tree) => tree,
                Err(e) => {
                    match create_corrupt_backup(&path) {
                        Ok(backup_path) => tracing::warn!(
                            path = %path.display(),
                            backup = %backup_path.display(),
                            error = %e,
                            "Settings store is corrupt, backed up and starting empty"
                        ),
                        Err(backup_err) => tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            backup_error = %backup_err,
                            "Settings store is corrupt and could not be backed up, starting empty"
                        ),
                    }
                    SettingsTree::default()
                }
            }
        } else {
            SettingsTree::default()
        };

        Ok(Self {
            path,
            tree,
            dirty: false,
        })
    }

    /// Returns the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomically writes the current tree to disk.
    fn atomic_save(&self) -> Result<(), StoreError> {
        let write_err = |source| StoreError::FileWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let content = serde_json::to_string_pretty(&self.tree)?;
        std::fs::write(&temp_path, content).map_err(write_err)?;
        std::fs::rename(&temp_path, &self.path).map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), "Settings store saved atomically");

        Ok(())
    }
}

impl SettingsBackend for FileBackend {
    fn get_string(&self, at: SettingsRef<'_>, key: &str) -> Result<String, StoreError> {
        Ok(self.tree.get_string(at, key))
    }

    fn set_string(
        &mut self,
        at: SettingsRef<'_>,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        self.tree.set_string(at, key, value);
        self.dirty = true;
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
        self.tree.set_strv(at, key, value);
        self.dirty = true;
        Ok(())
    }

    fn reset(&mut self, at: SettingsRef<'_>, key: &str) -> Result<(), StoreError> {
        self.tree.reset(at, key);
        self.dirty = true;
        Ok(())
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        if self.dirty {
            self.atomic_save()?;
            self.dirty = false;
        }
        Ok(())
    }
}

/// Renames a corrupt store file to `{path}.corrupt.{timestamp}`.
fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));
    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
