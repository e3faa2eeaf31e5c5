//! Tests for `gckb add`.

mod common;

use common::TestStore;
use predicates::prelude::*;

const PATH_PREFIX: &str = "/org/gnome/settings-daemon/plugins/media-keys/custom-keybindings/";

fn store_json(store: &TestStore) -> serde_json::Value {
    serde_json::from_str(&store.contents().unwrap()).unwrap()
}

#[test]
fn test_first_add_uses_custom0() {
    let store = TestStore::new();
    store.add("Terminal", "gnome-terminal", "<Ctrl><Alt>t");

    let json = store_json(&store);
    assert_eq!(
        json["lists"]["org.gnome.settings-daemon.plugins.media-keys"]["custom-keybindings"],
        serde_json::json!([format!("{PATH_PREFIX}custom0/")])
    );
}

#[test]
fn test_invalid_binding_rejected() {
    let store = TestStore::new();
    for binding in ["<Ctrl><Ctrl>t", "<Ctrl>", "t", "<Meta>t", ""] {
        store
            .cmd()
            .args(["add", "Terminal", "gnome-terminal", binding])
            .assert()
            .code(1)
            .stderr(format!("Invalid keyboard binding '{binding}'.\n"));
    }
    assert!(store.contents().is_none());
}

#[test]
fn test_duplicate_name_leaves_store_unchanged() {
    let store = TestStore::new();
    store.add("Terminal", "gnome-terminal", "<Ctrl><Alt>t");
    let before = store.contents();

    store
        .cmd()
        .args(["add", "Terminal", "xterm", "<Super>t"])
        .assert()
        .code(1)
        .stderr("A custom keyboard binding with that name already exists.\n");

    assert_eq!(store.contents(), before);
}

#[test]
fn test_duplicate_binding_rejected() {
    let store = TestStore::new();
    store.add("Terminal", "gnome-terminal", "<Ctrl><Alt>t");

    store
        .cmd()
        .args(["add", "Xterm", "xterm", "<Ctrl><Alt>t"])
        .assert()
        .code(1)
        .stderr("A custom keyboard binding with that binding already exists.\n");
}

#[test]
fn test_both_duplicates_reported() {
    let store = TestStore::new();
    store.add("Terminal", "gnome-terminal", "<Ctrl><Alt>t");

    store
        .cmd()
        .args(["add", "Terminal", "xterm", "<Ctrl><Alt>t"])
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("that name already exists")
                .and(predicate::str::contains("that binding already exists")),
        );
}

#[test]
fn test_command_may_start_with_hyphen() {
    let store = TestStore::new();
    store.add("Odd", "--weird-command", "<Alt>w");
    assert_eq!(store.list(), "0\tOdd\t--weird-command\t<Alt>w\n");
}

#[test]
fn test_add_reuses_deleted_slot() {
    let store = TestStore::new();
    store.add("A", "a", "<Ctrl>a");
    store.add("B", "b", "<Ctrl>b");
    store.add("C", "c", "<Ctrl>c");
    store.cmd().args(["delete", "1"]).assert().success();
    store.add("D", "d", "<Ctrl>d");

    let json = store_json(&store);
    assert_eq!(
        json["lists"]["org.gnome.settings-daemon.plugins.media-keys"]["custom-keybindings"],
        serde_json::json!([
            format!("{PATH_PREFIX}custom0/"),
            format!("{PATH_PREFIX}custom2/"),
            format!("{PATH_PREFIX}custom1/"),
        ])
    );
    assert_eq!(
        store.list(),
        "0\tA\ta\t<Ctrl>a\n1\tC\tc\t<Ctrl>c\n2\tD\td\t<Ctrl>d\n"
    );
}
