//! `gckb list`: print every registered custom keybinding.

use std::io::Write;

use anyhow::{Context, Result};
use gckb_store::{BindingStore, SettingsBackend};

/// Writes one `index<TAB>name<TAB>command<TAB>binding` line per record, in
/// stored order.
pub fn run<B: SettingsBackend>(store: &BindingStore<B>, out: &mut impl Write) -> Result<()> {
    let records = store
        .load_all()
        .context("Failed to read custom keybindings")?;

    for (index, record) in records.iter().enumerate() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            index, record.name, record.command, record.binding
        )?;
    }
    out.flush()?;

    tracing::debug!(count = records.len(), "Listed custom keybindings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gckb_store::{BindingRecord, MemoryBackend, allocate_identifier};

    fn listed(store: &BindingStore<MemoryBackend>) -> String {
        let mut out = Vec::new();
        run(store, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_store_prints_nothing() {
        let store = BindingStore::new(MemoryBackend::new());
        assert_eq!(listed(&store), "");
    }

    #[test]
    fn test_records_listed_with_positions() {
        let mut store = BindingStore::new(MemoryBackend::new());
        for (name, command, binding) in [
            ("Terminal", "gnome-terminal", "<Ctrl><Alt>t"),
            ("Files", "nautilus --new-window", "<Super>e"),
        ] {
            let collection = store.list_identifiers().unwrap();
            let path = allocate_identifier(&collection);
            store
                .append_and_persist(
                    &collection,
                    &BindingRecord::new(path, name, command, binding),
                )
                .unwrap();
        }

        assert_eq!(
            listed(&store),
            "0\tTerminal\tgnome-terminal\t<Ctrl><Alt>t\n\
             1\tFiles\tnautilus --new-window\t<Super>e\n"
        );
    }

    #[test]
    fn test_list_does_not_write() {
        let store = BindingStore::new(MemoryBackend::new());
        listed(&store);
        assert_eq!(store.backend().writes(), 0);
        assert_eq!(store.backend().syncs(), 0);
    }
}
