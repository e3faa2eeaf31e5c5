//! CLI errors and exit codes.
//!
//! Responsibilities:
//! - Define the user-facing errors the verbs report on stderr.
//! - Map errors to the exit statuses scripts rely on.
//!
//! Does NOT handle:
//! - Printing errors (done in `main`).
//! - Backend failures themselves (see `gckb_store::StoreError`).
//!
//! Invariants:
//! - Usage and validation failures exit with 1.
//! - Settings store failures exit with 2.

use gckb_store::{ConfigError, StoreError};
use thiserror::Error;

use crate::args::{USAGE, Verb};

/// Structured exit codes for gckb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - bad usage, invalid input, or a rejected change.
    GeneralError = 1,

    /// The settings store could not be read or written.
    StoreError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&StoreError> for ExitCode {
    fn from(err: &StoreError) -> Self {
        match err {
            StoreError::IndexOutOfBounds { .. } => ExitCode::GeneralError,
            _ => ExitCode::StoreError,
        }
    }
}

/// Errors reported to the user by the verbs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("No verb supplied.")]
    NoVerb,

    #[error("Unknown verb '{0}'.")]
    UnknownVerb(String),

    #[error("{}", wrong_arg_count_message(.0))]
    WrongArgCount(Verb),

    #[error("Invalid keyboard binding '{0}'.")]
    InvalidBinding(String),

    #[error("A custom keyboard binding with that name already exists.")]
    DuplicateName,

    #[error("A custom keyboard binding with that binding already exists.")]
    DuplicateBinding,

    /// Several problems found while checking a single request.
    #[error("{}", join_lines(.0))]
    Rejected(Vec<CliError>),

    #[error("Invalid index only {max} characters allowed.")]
    IndexTooLong { max: usize },

    #[error("Invalid index: '{0}'.")]
    InvalidIndexSyntax(String),

    #[error("Index out of bounds: '{0}'.")]
    IndexOutOfBounds(usize),
}

impl CliError {
    /// Usage text printed after the message, if any.
    pub fn usage(&self) -> Option<String> {
        match self {
            CliError::NoVerb | CliError::UnknownVerb(_) => Some(USAGE.to_string()),
            CliError::WrongArgCount(verb) => Some(verb.usage()),
            _ => None,
        }
    }
}

fn wrong_arg_count_message(verb: &Verb) -> &'static str {
    match verb {
        Verb::List => "List does not take arguments.",
        Verb::Add => "Add expects 3 arguments.",
        Verb::Delete => "Delete expects 0 or 1 arguments.",
    }
}

fn join_lines(errors: &[CliError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError unless a StoreError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.is::<CliError>() || cause.is::<ConfigError>() {
                return ExitCode::GeneralError;
            }
            if let Some(store_err) = cause.downcast_ref::<StoreError>() {
                return ExitCode::from(store_err);
            }
        }

        ExitCode::GeneralError
    }
}
