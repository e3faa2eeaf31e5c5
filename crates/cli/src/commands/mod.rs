//! CLI command implementations.
//!
//! Each verb takes the binding store explicitly so tests can drive it with an
//! in-memory backend.

pub mod add;
pub mod delete;
pub mod list;
pub mod manpage;
