//! The custom keybinding collection and its records.
//!
//! Responsibilities:
//! - Read the ordered list of record paths under the media-keys schema.
//! - Read, write and reset individual records.
//! - Allocate fresh record paths.
//! - Keep the path list and the records in lockstep on every mutation.
//!
//! Does NOT handle:
//! - Binding validation or duplicate detection (see `binding` and the CLI).
//! - Isolation from other processes editing the same settings.
//!
//! Invariants:
//! - The path list is never cached; every operation re-reads it.
//! - Every mutating operation ends with a backend `sync`.
//! - Removing a record resets its fields before dropping it from the list.

use std::collections::HashSet;

use crate::backend::{SettingsBackend, SettingsRef};
use crate::constants::{
    CUSTOM_KEYBINDING_SCHEMA, KEY_BINDING, KEY_COMMAND, KEY_CUSTOM_KEYBINDINGS, KEY_NAME,
    MEDIA_KEYS_SCHEMA, RECORD_KEYS,
};
use crate::error::StoreError;
use crate::types::{BindingRecord, identifier_for};

const COLLECTION: SettingsRef<'static> = SettingsRef::schema(MEDIA_KEYS_SCHEMA);

fn record_ref(identifier: &str) -> SettingsRef<'_> {
    SettingsRef::relocatable(CUSTOM_KEYBINDING_SCHEMA, identifier)
}

/// Returns the first of `custom0`, `custom1`, ... whose path is not in `existing`.
pub fn allocate_identifier(existing: &[String]) -> String {
    let taken: HashSet<&str> = existing.iter().map(String::as_str).collect();
    let mut n = 0;
    loop {
        let candidate = identifier_for(n);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}

/// Custom keybindings stored in a [`SettingsBackend`].
#[derive(Debug)]
pub struct BindingStore<B> {
    backend: B,
}

impl<B: SettingsBackend> BindingStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Registered record paths in stored order.
    pub fn list_identifiers(&self) -> Result<Vec<String>, StoreError> {
        self.backend.get_strv(COLLECTION, KEY_CUSTOM_KEYBINDINGS)
    }

    /// Reads the fields of the record at `identifier`.
    pub fn load_record(&self, identifier: &str) -> Result<BindingRecord, StoreError> {
        let at = record_ref(identifier);
        Ok(BindingRecord {
            path: identifier.to_string(),
            name: self.backend.get_string(at, KEY_NAME)?,
            command: self.backend.get_string(at, KEY_COMMAND)?,
            binding: self.backend.get_string(at, KEY_BINDING)?,
        })
    }

    /// Reads every registered record in stored order.
    pub fn load_all(&self) -> Result<Vec<BindingRecord>, StoreError> {
        self.list_identifiers()?
            .iter()
            .map(|identifier| self.load_record(identifier))
            .collect()
    }

    /// Writes `record` under `record.path`, appends that path to `collection`
    /// and syncs.
    ///
    /// `collection` is the path list the caller read; `record.path` is normally
    /// the result of [`allocate_identifier`] over it.
    pub fn append_and_persist(
        &mut self,
        collection: &[String],
        record: &BindingRecord,
    ) -> Result<(), StoreError> {
        let at = record_ref(&record.path);
        self.backend.set_string(at, KEY_NAME, &record.name)?;
        self.backend.set_string(at, KEY_COMMAND, &record.command)?;
        self.backend.set_string(at, KEY_BINDING, &record.binding)?;

        let mut updated = collection.to_vec();
        updated.push(record.path.clone());
        self.backend
            .set_strv(COLLECTION, KEY_CUSTOM_KEYBINDINGS, &updated)?;
        self.backend.sync()?;

        tracing::debug!(identifier = %record.path, total = updated.len(), "Custom keybinding added");
        Ok(())
    }

    /// Restores the fields of the record at `identifier` to their defaults and syncs.
    pub fn reset_record(&mut self, identifier: &str) -> Result<(), StoreError> {
        let at = record_ref(identifier);
        for key in RECORD_KEYS {
            self.backend.reset(at, key)?;
        }
        self.backend.sync()?;

        tracing::debug!(identifier = %identifier, "Custom keybinding reset");
        Ok(())
    }

    /// Resets the record at position `index` and drops it from the list.
    ///
    /// Returns the removed path.
    ///
    /// # Errors
    /// Returns [`StoreError::IndexOutOfBounds`] without touching the store if
    /// `index` is not a position in the current list.
    pub fn remove_from_collection(&mut self, index: usize) -> Result<String, StoreError> {
        let mut identifiers = self.list_identifiers()?;
        if index >= identifiers.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: identifiers.len(),
            });
        }

        let removed = identifiers.remove(index);
        self.reset_record(&removed)?;
        self.backend
            .set_strv(COLLECTION, KEY_CUSTOM_KEYBINDINGS, &identifiers)?;
        self.backend.sync()?;

        tracing::debug!(index, identifier = %removed, "Custom keybinding removed");
        Ok(removed)
    }

    /// Resets every registered record and empties the list.
    ///
    /// Returns how many records were removed.
    pub fn remove_all(&mut self) -> Result<usize, StoreError> {
        let identifiers = self.list_identifiers()?;
        for identifier in &identifiers {
            self.reset_record(identifier)?;
        }
        self.backend
            .set_strv(COLLECTION, KEY_CUSTOM_KEYBINDINGS, &[])?;
        self.backend.sync()?;

        tracing::debug!(removed = identifiers.len(), "All custom keybindings removed");
        Ok(identifiers.len())
    }
}
