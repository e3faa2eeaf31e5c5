//! Tests for `gckb delete`.

mod common;

use common::TestStore;

fn store_abc() -> TestStore {
    let store = TestStore::new();
    store.add("A", "a", "<Ctrl>a");
    store.add("B", "b", "<Ctrl>b");
    store.add("C", "c", "<Ctrl>c");
    store
}

#[test]
fn test_delete_middle_entry() {
    let store = store_abc();
    store.cmd().args(["delete", "1"]).assert().success().stdout("");

    assert_eq!(store.list(), "0\tA\ta\t<Ctrl>a\n1\tC\tc\t<Ctrl>c\n");
    let contents = store.contents().unwrap();
    assert!(!contents.contains("<Ctrl>b"), "B's fields were not reset");
}

#[test]
fn test_invalid_indices_leave_store_unchanged() {
    let store = store_abc();
    let before = store.contents();

    for (index, message) in [
        ("00", "Invalid index: '00'.\n"),
        ("-1", "Invalid index: '-1'.\n"),
        ("x", "Invalid index: 'x'.\n"),
        ("12345", "Invalid index only 4 characters allowed.\n"),
    ] {
        store
            .cmd()
            .args(["delete", index])
            .assert()
            .code(1)
            .stderr(message);
    }

    assert_eq!(store.contents(), before);
}

#[test]
fn test_index_out_of_bounds() {
    let store = store_abc();
    let before = store.contents();

    store
        .cmd()
        .args(["delete", "3"])
        .assert()
        .code(1)
        .stderr("Index out of bounds: '3'.\n");

    assert_eq!(store.contents(), before);
}

#[test]
fn test_delete_all() {
    let store = store_abc();
    store.cmd().arg("delete").assert().success();
    assert_eq!(store.list(), "");

    store.cmd().arg("delete").assert().success();
    assert_eq!(store.list(), "");
}

#[test]
fn test_delete_all_on_empty_store() {
    let store = TestStore::new();
    store.cmd().arg("delete").assert().success();
    assert_eq!(store.list(), "");
}

#[test]
fn test_delete_first_then_list_renumbers() {
    let store = store_abc();
    store.cmd().args(["delete", "0"]).assert().success();
    assert_eq!(store.list(), "0\tB\tb\t<Ctrl>b\n1\tC\tc\t<Ctrl>c\n");
}
