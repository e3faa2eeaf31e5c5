//! Shared test utilities for gckb integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point every command at a JSON store inside a temporary directory.
//!
//! Invariants / Assumptions:
//! - Tests never touch the desktop's real GSettings.
//! - Each `TestStore` owns its temporary directory; dropping it removes the store.

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary JSON settings store.
pub struct TestStore {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        Self { _dir: dir, path }
    }

    /// Returns a hermetic `gckb` command bound to this store.
    ///
    /// It ensures:
    /// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
    /// - The file backend is selected with this store's path.
    /// - Other `GCKB_*` variables are cleared to ensure no leakage from the host.
    pub fn cmd(&self) -> Command {
        let mut cmd = gckb_cmd();
        cmd.env("GCKB_BACKEND", "file")
            .env("GCKB_STORE_PATH", &self.path);
        cmd
    }

    /// Runs `gckb add` and asserts success.
    pub fn add(&self, name: &str, command: &str, binding: &str) {
        self.cmd()
            .args(["add", name, command, binding])
            .assert()
            .success();
    }

    /// Runs `gckb list` and returns stdout.
    pub fn list(&self) -> String {
        let output = self.cmd().arg("list").assert().success();
        String::from_utf8(output.get_output().stdout.clone()).unwrap()
    }

    /// Raw store file contents, or `None` if nothing was written yet.
    pub fn contents(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }
}

/// Executable that does not exist, so the gsettings backend can never reach
/// the host's real settings.
pub const MISSING_GSETTINGS: &str = "/nonexistent/gckb-test/gsettings";

/// Returns a hermetic `gckb` command using the default backend.
pub fn gckb_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gckb");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("GCKB_BACKEND")
        .env_remove("GCKB_STORE_PATH")
        .env_remove("RUST_LOG");
    cmd.env("GCKB_GSETTINGS_BIN", MISSING_GSETTINGS);

    cmd
}
