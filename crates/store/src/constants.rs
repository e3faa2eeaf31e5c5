//! Centralized constants for the gckb workspace.
//!
//! The schema identifiers, keys and path layout are shared with
//! gnome-settings-daemon and gnome-control-center, which read the same
//! settings. They must match those components byte for byte.

// =============================================================================
// GNOME Settings Schema
// =============================================================================

/// Schema holding the list of registered custom keybinding paths.
pub const MEDIA_KEYS_SCHEMA: &str = "org.gnome.settings-daemon.plugins.media-keys";

/// Relocatable schema of a single custom keybinding record.
pub const CUSTOM_KEYBINDING_SCHEMA: &str =
    "org.gnome.settings-daemon.plugins.media-keys.custom-keybinding";

/// Prefix of every custom keybinding record path.
pub const CUSTOM_KEYBINDING_PATH_PREFIX: &str =
    "/org/gnome/settings-daemon/plugins/media-keys/custom-keybindings/";

/// Leaf name prefix of allocated records (`custom0`, `custom1`, ...).
pub const CUSTOM_KEYBINDING_ID_PREFIX: &str = "custom";

/// List key under [`MEDIA_KEYS_SCHEMA`] holding the record paths.
pub const KEY_CUSTOM_KEYBINDINGS: &str = "custom-keybindings";

/// Display label of a record.
pub const KEY_NAME: &str = "name";

/// Shell command run when the binding fires.
pub const KEY_COMMAND: &str = "command";

/// Accelerator string of a record.
pub const KEY_BINDING: &str = "binding";

/// Every string field of a custom keybinding record.
pub const RECORD_KEYS: [&str; 3] = [KEY_NAME, KEY_COMMAND, KEY_BINDING];

// =============================================================================
// CLI Limits
// =============================================================================

/// Maximum number of characters accepted for a `delete` index.
pub const MAX_INDEX_DIGITS: usize = 4;

// =============================================================================
// Backend Defaults
// =============================================================================

/// Executable used by the gsettings backend when none is configured.
pub const DEFAULT_GSETTINGS_PROGRAM: &str = "gsettings";

/// File name of the JSON settings store inside the config directory.
pub const STORE_FILE_NAME: &str = "store.json";
