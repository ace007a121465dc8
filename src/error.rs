//! Error types for the fatal conditions of a backup run.
//!
//! Per-file and per-source problems are logged and skipped by the runner and
//! never surface here.

use crate::sysexits;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn the settings file into [`Settings`](crate::settings::Settings).
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file does not exist.
    #[error("The settings file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    /// The settings file exists but cannot be read.
    #[error("Failed to read settings file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The settings file is not valid JSON or misses a required field.
    #[error("Failed to parse settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// `LogLevel` is not one of `Error`, `Info` or `Debug`.
    #[error("Unknown log level '{0}', expected one of Error, Info, Debug")]
    InvalidLogLevel(String),
}

impl SettingsError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            SettingsError::NotFound { .. } => sysexits::EX_NOINPUT,
            SettingsError::Read { .. } => sysexits::EX_IOERR,
            SettingsError::Parse { .. } => sysexits::EX_DATAERR,
            SettingsError::InvalidLogLevel(_) => sysexits::EX_CONFIG,
        }
    }
}

/// Failure that aborts a whole backup pass.
#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Destination folder not found: {}", .0.display())]
    DestinationNotFound(PathBuf),

    #[error("Failed to create log file '{}': {source}", path.display())]
    CreateLog { path: PathBuf, source: io::Error },

    #[error("Failed to write log file: {0}")]
    Log(#[from] io::Error),
}

impl BackupError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            BackupError::DestinationNotFound(_) => sysexits::EX_UNAVAILABLE,
            BackupError::CreateLog { .. } => sysexits::EX_CANTCREAT,
            BackupError::Log(_) => sysexits::EX_IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_exit_codes_are_distinct() {
        let path = PathBuf::from("settings.json");
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let codes = [
            SettingsError::NotFound { path: path.clone() }.exit_code(),
            SettingsError::Read {
                path: path.clone(),
                source: io::Error::other("denied"),
            }
            .exit_code(),
            SettingsError::Parse {
                path,
                source: parse,
            }
            .exit_code(),
            SettingsError::InvalidLogLevel("Warn".to_string()).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_backup_error_display() {
        let err = BackupError::DestinationNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "Destination folder not found: /no/such/dir");
        assert_eq!(err.exit_code(), sysexits::EX_UNAVAILABLE);
    }
}
