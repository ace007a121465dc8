//! fbackup: copies the immediate files of configured source directories into
//! timestamped backup folders.
//!
//! This crate provides the settings loader, the backup runner and the logger
//! used by the `fbackup` CLI application.

pub mod backup;
pub mod constants;
pub mod error;
pub mod file_util;
pub mod logger;
pub mod path_util;
pub mod settings;
pub mod sysexits;
