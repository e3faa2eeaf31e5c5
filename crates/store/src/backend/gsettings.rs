//! Settings backend that drives the `gsettings` command-line tool.
//!
//! Responsibilities:
//! - Translate `SettingsBackend` calls into `gsettings get|set|reset` invocations.
//! - Convert values to and from GVariant text.
//!
//! Does NOT handle:
//! - Talking to dconf directly; gsettings picks the configured GSettings backend.
//!
//! Invariants:
//! - Every invocation is a separate process that flushes its own writes before
//!   exiting, so `sync` has nothing left to do.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::gvariant;
use super::{SettingsBackend, SettingsRef};
use crate::error::StoreError;

/// Settings backend backed by the desktop's GSettings service.
#[derive(Debug, Clone)]
pub struct GsettingsBackend {
    program: PathBuf,
}

impl GsettingsBackend {
    /// Creates a backend that runs `program` (usually `gsettings`).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs the tool and returns its stdout.
    fn run(&self, args: &[&str]) -> Result<String, StoreError> {
        let program = self.program.display().to_string();
        tracing::trace!(program = %program, args = ?args, "Running gsettings");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| StoreError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(StoreError::CommandFailed {
                program,
                args: args.join(" "),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| StoreError::InvalidOutput { program })
    }
}

impl Default for GsettingsBackend {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_GSETTINGS_PROGRAM)
    }
}

impl SettingsBackend for GsettingsBackend {
    fn get_string(&self, at: SettingsRef<'_>, key: &str) -> Result<String, StoreError> {
        let printed = self.run(&["get", &at.to_string(), key])?;
        Ok(gvariant::parse_string(&printed)?)
    }

    fn set_string(
        &mut self,
        at: SettingsRef<'_>,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        self.run(&["set", &at.to_string(), key, &gvariant::format_string(value)])?;
        Ok(())
    }

    fn get_strv(&self, at: SettingsRef<'_>, key: &str) -> Result<Vec<String>, StoreError> {
        let printed = self.run(&["get", &at.to_string(), key])?;
        Ok(gvariant::parse_string_array(&printed)?)
    }

    fn set_strv(
        &mut self,
        at: SettingsRef<'_>,
        key: &str,
        value: &[String],
    ) -> Result<(), StoreError> {
        self.run(&[
            "set",
            &at.to_string(),
            key,
            &gvariant::format_string_array(value),
        ])?;
        Ok(())
    }

    fn reset(&mut self, at: SettingsRef<'_>, key: &str) -> Result<(), StoreError> {
        self.run(&["reset", &at.to_string(), key])?;
        Ok(())
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        tracing::trace!("gsettings writes are flushed per invocation");
        Ok(())
    }
}
