//! Settings of a backup run.
//!
//! The settings live in a JSON file (`settings.json` in the working directory
//! by default) with PascalCase keys:
//!
//! ```json
//! {
//!   "SourcePaths": ["/home/me/documents", "/home/me/photos"],
//!   "DestinationPath": "/mnt/backup",
//!   "LogLevel": "Info"
//! }
//! ```

use crate::error::SettingsError;
use crate::logger::LogLevel;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk shape of the settings file. Every key is required.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct SettingsFile {
    source_paths: Vec<PathBuf>,
    destination_path: PathBuf,
    log_level: String,
}

/// Validated settings, immutable for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Source directories, backed up in this order.
    pub source_paths: Vec<PathBuf>,
    /// Directory receiving the backup folders and the run log.
    pub destination_path: PathBuf,
    /// Severity threshold for the run log.
    pub log_level: LogLevel,
}

impl Settings {
    /// Reads and validates the settings file at `path`.
    ///
    /// # Errors
    /// Returns [`SettingsError`] if the file is missing or unreadable, is not
    /// valid settings JSON, or names an unknown log level.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SettingsError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SettingsError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Self::parse(&json, path)
    }

    /// Parses a settings document; `path` only labels parse errors.
    pub fn parse(json: &str, path: &Path) -> Result<Self, SettingsError> {
        let file: SettingsFile =
            serde_json::from_str(json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let log_level = file
            .log_level
            .parse::<LogLevel>()
            .map_err(|e| SettingsError::InvalidLogLevel(e.0))?;
        Ok(Self {
            source_paths: file.source_paths,
            destination_path: file.destination_path,
            log_level,
        })
    }
}
