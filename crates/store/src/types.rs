//! Custom keybinding record types.

use crate::constants::{CUSTOM_KEYBINDING_ID_PREFIX, CUSTOM_KEYBINDING_PATH_PREFIX};

/// One custom keybinding as persisted in the settings store.
///
/// `name`, `command` and `binding` read as `""` when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingRecord {
    /// Settings path the record lives at; unique within the store.
    pub path: String,
    /// Display label.
    pub name: String,
    /// Shell command run on activation.
    pub command: String,
    /// Accelerator string, e.g. `<Ctrl><Alt>t`.
    pub binding: String,
}

impl BindingRecord {
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        command: impl Into<String>,
        binding: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            command: command.into(),
            binding: binding.into(),
        }
    }
}

/// Settings path of the `n`th allocatable record, e.g. `.../custom-keybindings/custom2/`.
pub fn identifier_for(n: usize) -> String {
    format!(
        "{}{}{}/",
        CUSTOM_KEYBINDING_PATH_PREFIX, CUSTOM_KEYBINDING_ID_PREFIX, n
    )
}
