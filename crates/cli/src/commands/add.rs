//! `gckb add <name> <command> <binding>`: register a custom keybinding.
//!
//! Invariants:
//! - Every problem with the request is reported, not just the first.
//! - A rejected request never writes to the store.

use anyhow::{Context, Result};
use gckb_store::{BindingRecord, BindingStore, SettingsBackend, allocate_identifier, parse_binding};

use crate::error::CliError;

/// Validates the request and, if accepted, appends a new record.
///
/// Returns the settings path the record was written to.
pub fn run<B: SettingsBackend>(
    store: &mut BindingStore<B>,
    name: &str,
    command: &str,
    binding: &str,
) -> Result<String> {
    if let Err(reason) = parse_binding(binding) {
        tracing::debug!(binding = %binding, reason = %reason, "Rejected keyboard binding");
        return Err(CliError::InvalidBinding(binding.to_string()).into());
    }

    let collection = store
        .list_identifiers()
        .context("Failed to read custom keybindings")?;

    let mut violations = Vec::new();
    let mut name_taken = false;
    let mut binding_taken = false;
    for identifier in &collection {
        let record = store
            .load_record(identifier)
            .with_context(|| format!("Failed to read custom keybinding at {identifier}"))?;
        name_taken |= record.name == name;
        binding_taken |= record.binding == binding;
    }
    if name_taken {
        violations.push(CliError::DuplicateName);
    }
    if binding_taken {
        violations.push(CliError::DuplicateBinding);
    }

    match violations.len() {
        0 => {}
        1 => return Err(violations.remove(0).into()),
        _ => return Err(CliError::Rejected(violations).into()),
    }

    let identifier = allocate_identifier(&collection);
    let record = BindingRecord::new(identifier.clone(), name, command, binding);
    store
        .append_and_persist(&collection, &record)
        .context("Failed to save custom keybinding")?;

    tracing::debug!(identifier = %identifier, name = %name, "Custom keybinding registered");
    Ok(identifier)
}
