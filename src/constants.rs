/// Default settings file name, resolved against the working directory.
pub const SETTINGS_NAME: &str = "settings.json";
/// Log file used whenever no per-run log file is open.
pub const FALLBACK_LOG_NAME: &str = "log.txt";
/// Prefix of every backup folder created under the destination.
pub const BACKUP_FOLDER_PREFIX: &str = "Backup";
/// Prefix of the per-run log file created under the destination.
pub const RUN_LOG_PREFIX: &str = "backup_log";
/// Timestamp embedded in backup folder and run log names.
pub const NAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Timestamp written at the start of every log line.
pub const LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
