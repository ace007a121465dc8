//! One backup pass over the configured source directories.
//!
//! For every source directory a `Backup_<name>_<timestamp>` folder is created
//! (or reused, if it already exists) under the destination and the immediate
//! files of the source are copied into it. A missing or unreadable source, a
//! folder that cannot be created or a file that cannot be copied is logged and
//! skipped; only a missing destination or an unusable run log abort the pass.

use crate::error::BackupError;
use crate::file_util;
use crate::logger::Logger;
use crate::path_util;
use crate::settings::Settings;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a completed backup pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// Per-run log file under the destination.
    pub log_file: PathBuf,
    /// Backup folders created, in source order.
    pub folders: Vec<PathBuf>,
    /// Files copied across all sources.
    pub copied: usize,
    /// Files that could not be copied.
    pub failed: usize,
    /// Sources skipped because they were missing or unusable.
    pub skipped_sources: usize,
}

/// Runs a backup pass stamped with the current local time.
///
/// `fallback_log` receives the error line of a fatal failure, such as a
/// missing destination.
///
/// # Errors
/// Returns [`BackupError`] if the destination does not exist or the run log
/// cannot be created or written.
pub fn run(settings: &Settings, fallback_log: &Path) -> Result<BackupReport, BackupError> {
    run_at(settings, fallback_log, Local::now())
}

/// Runs a backup pass whose folder and log names embed `started`.
///
/// A fatal error is also written to `fallback_log`, as the run log is either
/// missing or unusable by then.
///
/// # Errors
/// See [`run`].
pub fn run_at(
    settings: &Settings,
    fallback_log: &Path,
    started: DateTime<Local>,
) -> Result<BackupReport, BackupError> {
    let result = backup_pass(settings, started);
    if let Err(e) = &result {
        let mut logger = Logger::fallback(settings.log_level, fallback_log);
        if let Err(log_err) = logger.error(e.to_string()) {
            eprintln!(
                "Failed to write log file '{}': {log_err}",
                fallback_log.display()
            );
        }
    }
    result
}

fn backup_pass(settings: &Settings, started: DateTime<Local>) -> Result<BackupReport, BackupError> {
    let destination = &settings.destination_path;
    if !destination.is_dir() {
        return Err(BackupError::DestinationNotFound(destination.clone()));
    }

    let stamp = path_util::name_timestamp(&started);
    let log_file = destination.join(path_util::run_log_name(&stamp));
    // closed when `logger` goes out of scope, on success and on `?` alike
    let mut logger = Logger::run_log(settings.log_level, &log_file).map_err(|source| {
        BackupError::CreateLog {
            path: log_file.clone(),
            source,
        }
    })?;

    let mut report = BackupReport {
        log_file,
        ..Default::default()
    };

    logger.info("Backup started.")?;
    for source in &settings.source_paths {
        backup_source(source, destination, &stamp, &mut logger, &mut report)?;
    }
    logger.info("Backup completed.")?;

    Ok(report)
}

/// Backs up the immediate files of one source directory.
///
/// Only logging failures are returned; everything else is logged and counted.
fn backup_source(
    source: &Path,
    destination: &Path,
    stamp: &str,
    logger: &mut Logger,
    report: &mut BackupReport,
) -> Result<(), BackupError> {
    if !source.is_dir() {
        logger.error(format!("Source folder not found: {}", source.display()))?;
        report.skipped_sources += 1;
        return Ok(());
    }

    // listed first, so an unreadable source leaves no empty backup folder
    let files = match file_util::list_files(source) {
        Ok(files) => files,
        Err(e) => {
            logger.error(format!(
                "Failed to read source folder {}: {e:#}",
                source.display()
            ))?;
            report.skipped_sources += 1;
            return Ok(());
        }
    };

    let folder = destination.join(path_util::backup_folder_name(source, stamp));
    if let Err(e) = fs::create_dir_all(&folder) {
        logger.error(format!(
            "Failed to create backup folder {}: {e}",
            folder.display()
        ))?;
        report.skipped_sources += 1;
        return Ok(());
    }
    logger.info(format!("Created backup folder: {}", folder.display()))?;
    report.folders.push(folder.clone());

    for file in files {
        match file_util::copy_into(&file, &folder) {
            Ok(target) => {
                report.copied += 1;
                let name = target.file_name().unwrap_or_default().to_string_lossy();
                logger.debug(format!("Copied file: {name}"))?;
            }
            Err(e) => {
                report.failed += 1;
                logger.error(format!("Failed to copy file {}: {e:#}", file.display()))?;
            }
        }
    }
    Ok(())
}
