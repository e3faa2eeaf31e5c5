//! Resolved store configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::error::ConfigError;
use crate::backend::{FileBackend, GsettingsBackend, SettingsBackend};
use crate::error::StoreError;

/// Which settings backend to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// The desktop's GSettings service, through the `gsettings` tool.
    #[default]
    Gsettings,
    /// A standalone JSON file.
    File,
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gsettings" => Ok(Self::Gsettings),
            "file" => Ok(Self::File),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gsettings => write!(f, "gsettings"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Fully resolved backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Gsettings { program: PathBuf },
    File { path: PathBuf },
}

impl StoreConfig {
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Gsettings { .. } => BackendKind::Gsettings,
            Self::File { .. } => BackendKind::File,
        }
    }

    /// Opens the configured backend.
    ///
    /// # Errors
    /// Returns an error if the file backend's store exists but cannot be read.
    pub fn open(&self) -> Result<Box<dyn SettingsBackend>, StoreError> {
        match self {
            Self::Gsettings { program } => Ok(Box::new(GsettingsBackend::new(program.clone()))),
            Self::File { path } => Ok(Box::new(FileBackend::open(path.clone())?)),
        }
    }
}
