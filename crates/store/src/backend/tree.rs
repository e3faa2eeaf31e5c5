//! In-process representation of a settings tree.
//!
//! Shared by the file and memory backends. Values are grouped by the
//! `SCHEMA[:PATH]` address of their settings object, then by key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SettingsRef;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SettingsTree {
    #[serde(default)]
    pub lists: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub strings: BTreeMap<String, BTreeMap<String, String>>,
}

impl SettingsTree {
    pub fn get_string(&self, at: SettingsRef<'_>, key: &str) -> String {
        self.strings
            .get(&at.to_string())
            .and_then(|object| object.get(key))
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_string(&mut self, at: SettingsRef<'_>, key: &str, value: &str) {
        self.strings
            .entry(at.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get_strv(&self, at: SettingsRef<'_>, key: &str) -> Vec<String> {
        self.lists
            .get(&at.to_string())
            .and_then(|object| object.get(key))
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_strv(&mut self, at: SettingsRef<'_>, key: &str, value: &[String]) {
        self.lists
            .entry(at.to_string())
            .or_default()
            .insert(key.to_string(), value.to_vec());
    }

    /// Drop any stored value for `key`, pruning objects left empty.
    pub fn reset(&mut self, at: SettingsRef<'_>, key: &str) {
        let address = at.to_string();
        if let Some(object) = self.strings.get_mut(&address) {
            object.remove(key);
            if object.is_empty() {
                self.strings.remove(&address);
            }
        }
        if let Some(object) = self.lists.get_mut(&address) {
            object.remove(key);
            if object.is_empty() {
                self.lists.remove(&address);
            }
        }
    }
}
