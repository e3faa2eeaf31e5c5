//! `gckb delete [<index>]`: remove one custom keybinding, or all of them.

use anyhow::{Context, Result};
use gckb_store::constants::MAX_INDEX_DIGITS;
use gckb_store::{BindingStore, SettingsBackend, StoreError};

use crate::error::CliError;

/// Parses a `delete` index.
///
/// Accepts `0` or a decimal numeral without a leading zero, at most
/// [`MAX_INDEX_DIGITS`] characters long. Length is checked first.
pub fn parse_index(raw: &str) -> Result<usize, CliError> {
    if raw.chars().count() > MAX_INDEX_DIGITS {
        return Err(CliError::IndexTooLong {
            max: MAX_INDEX_DIGITS,
        });
    }

    let well_formed = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));
    if !well_formed {
        return Err(CliError::InvalidIndexSyntax(raw.to_string()));
    }

    raw.parse()
        .map_err(|_| CliError::InvalidIndexSyntax(raw.to_string()))
}

/// Removes the record at `index`, or every record when `index` is `None`.
pub fn run<B: SettingsBackend>(store: &mut BindingStore<B>, index: Option<usize>) -> Result<()> {
    match index {
        Some(index) => match store.remove_from_collection(index) {
            Ok(identifier) => {
                tracing::debug!(index, identifier = %identifier, "Deleted custom keybinding");
                Ok(())
            }
            Err(StoreError::IndexOutOfBounds { index, .. }) => {
                Err(CliError::IndexOutOfBounds(index).into())
            }
            Err(e) => Err(e).context("Failed to delete custom keybinding"),
        },
        None => {
            let removed = store
                .remove_all()
                .context("Failed to delete custom keybindings")?;
            tracing::debug!(removed, "Deleted all custom keybindings");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gckb_store::{BindingRecord, MemoryBackend, allocate_identifier, identifier_for};

    fn store_with(names: &[&str]) -> BindingStore<MemoryBackend> {
        let mut store = BindingStore::new(MemoryBackend::new());
        for (i, name) in names.iter().enumerate() {
            let collection = store.list_identifiers().unwrap();
            let path = allocate_identifier(&collection);
            store
                .append_and_persist(
                    &collection,
                    &BindingRecord::new(path, *name, "true", format!("<Ctrl>{i}")),
                )
                .unwrap();
        }
        store
    }

    fn names(store: &BindingStore<MemoryBackend>) -> Vec<String> {
        store
            .load_all()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn test_parse_index_accepts_plain_numerals() {
        assert_eq!(parse_index("0"), Ok(0));
        assert_eq!(parse_index("7"), Ok(7));
        assert_eq!(parse_index("9999"), Ok(9999));
    }

    #[test]
    fn test_parse_index_rejects_leading_zero() {
        assert_eq!(
            parse_index("00"),
            Err(CliError::InvalidIndexSyntax("00".to_string()))
        );
        assert_eq!(
            parse_index("01"),
            Err(CliError::InvalidIndexSyntax("01".to_string()))
        );
    }

    #[test]
    fn test_parse_index_rejects_signs_and_garbage() {
        for raw in ["-1", "+1", "", "1a", " 1", "٣"] {
            assert_eq!(
                parse_index(raw),
                Err(CliError::InvalidIndexSyntax(raw.to_string())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_index_length_checked_first() {
        assert_eq!(parse_index("12345"), Err(CliError::IndexTooLong { max: 4 }));
        assert_eq!(parse_index("abcde"), Err(CliError::IndexTooLong { max: 4 }));
        assert_eq!(parse_index("00000"), Err(CliError::IndexTooLong { max: 4 }));
    }

    #[test]
    fn test_delete_middle_record() {
        let mut store = store_with(&["A", "B", "C"]);
        run(&mut store, Some(1)).unwrap();

        assert_eq!(names(&store), vec!["A", "C"]);
        assert_eq!(
            store.load_record(&identifier_for(1)).unwrap(),
            BindingRecord::new(identifier_for(1), "", "", "")
        );
    }

    #[test]
    fn test_delete_out_of_bounds_reports_index() {
        let mut store = store_with(&["A"]);
        let writes = store.backend().writes();

        let err = run(&mut store, Some(1)).unwrap_err();
        assert_eq!(
            err.downcast::<CliError>().unwrap(),
            CliError::IndexOutOfBounds(1)
        );
        assert_eq!(store.backend().writes(), writes);
    }

    #[test]
    fn test_delete_all_is_idempotent() {
        let mut store = store_with(&["A", "B"]);
        run(&mut store, None).unwrap();
        assert!(names(&store).is_empty());

        run(&mut store, None).unwrap();
        assert!(names(&store).is_empty());
    }
}
