use clap::Parser;
use fbackup::backup;
use fbackup::constants::{FALLBACK_LOG_NAME, SETTINGS_NAME};
use fbackup::logger::{LogLevel, Logger};
use fbackup::settings::Settings;
use std::path::{Path, PathBuf};
use std::process;

/// Copies the files of the configured source directories into timestamped
/// backup folders.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Settings file to read.
    #[arg(short, long, default_value = SETTINGS_NAME)]
    config: PathBuf,
}

/// Entry point for the fbackup CLI application.
/// Loads the settings, runs one backup pass and exits with a non-zero
/// status only when the pass could not be performed.
fn main() {
    let cli = Cli::parse();
    let fallback_log = Path::new(FALLBACK_LOG_NAME);

    let settings = match Settings::load(&cli.config) {
        Ok(settings) => settings,
        Err(e) => {
            // no level is configured yet, so only errors get through
            let mut logger = Logger::fallback(LogLevel::default(), fallback_log);
            if let Err(log_err) = logger.error(format!("Failed to load settings: {e}")) {
                eprintln!("Failed to write log file '{FALLBACK_LOG_NAME}': {log_err}");
            }
            process::exit(e.exit_code());
        }
    };

    // fatal errors are already logged through the fallback log
    if let Err(e) = backup::run(&settings, fallback_log) {
        process::exit(e.exit_code());
    }
}
