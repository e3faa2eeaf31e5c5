//! Tests for the store configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` and `global_test_lock()` to prevent environment
//!   variable pollution between tests.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
