//! Names of the folders and files a backup run creates.

use crate::constants::{BACKUP_FOLDER_PREFIX, NAME_TIMESTAMP_FORMAT, RUN_LOG_PREFIX};
use chrono::{DateTime, Local};
use std::path::{Component, Path};

/// Base name used for a source path that has no final normal component, e.g. `/`.
const ROOT_NAME: &str = "root";

/// Formats `time` the way it is embedded in folder and log file names.
pub fn name_timestamp(time: &DateTime<Local>) -> String {
    time.format(NAME_TIMESTAMP_FORMAT).to_string()
}

/// Returns the last normal component of `source`.
///
/// Trailing separators are ignored, so `/data/photos/` yields `photos`.
pub fn source_base_name(source: &Path) -> String {
    source
        .components()
        .rev()
        .find_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .unwrap_or_else(|| ROOT_NAME.to_string())
}

/// `Backup_<sourceBaseName>_<yyyyMMdd_HHmmss>`
pub fn backup_folder_name(source: &Path, stamp: &str) -> String {
    format!(
        "{BACKUP_FOLDER_PREFIX}_{}_{stamp}",
        source_base_name(source)
    )
}

/// `backup_log_<yyyyMMdd_HHmmss>.txt`
pub fn run_log_name(stamp: &str) -> String {
    format!("{RUN_LOG_PREFIX}_{stamp}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    #[test]
    fn test_name_timestamp() {
        let time = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(name_timestamp(&time), "20250102_030405");
    }

    #[test]
    fn test_source_base_name() {
        assert_eq!(source_base_name(Path::new("/src/a")), "a");
        assert_eq!(source_base_name(Path::new("/src/a/")), "a");
        assert_eq!(source_base_name(Path::new("relative/dir")), "dir");
        assert_eq!(source_base_name(&PathBuf::from("photos")), "photos");
    }

    #[test]
    fn test_source_base_name_without_normal_component() {
        assert_eq!(source_base_name(Path::new("/")), "root");
        assert_eq!(source_base_name(Path::new("")), "root");
    }

    #[test]
    fn test_backup_folder_name() {
        assert_eq!(
            backup_folder_name(Path::new("/src/a"), "20250102_030405"),
            "Backup_a_20250102_030405"
        );
    }

    #[test]
    fn test_run_log_name() {
        assert_eq!(
            run_log_name("20250102_030405"),
            "backup_log_20250102_030405.txt"
        );
    }
}
