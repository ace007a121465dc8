//! Severity-filtered logging to the console and a log file.
//!
//! A [`Logger`] carries its own threshold and sink; nothing here is global.
//! Every accepted message becomes one line of the form
//! `yyyy-MM-dd HH:mm:ss [Level] message`, printed to stdout and written to the
//! sink, which is flushed after each line.

use crate::constants::LINE_TIMESTAMP_FORMAT;
use chrono::{DateTime, Local};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Message severity. Declaration order is the filtering order:
/// `Error` is the most severe, `Debug` the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    #[default]
    Error,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`LogLevel`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown log level '{0}'")]
pub struct UnknownLogLevel(pub String);

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    /// Level names are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Error" => Ok(LogLevel::Error),
            "Info" => Ok(LogLevel::Info),
            "Debug" => Ok(LogLevel::Debug),
            other => Err(UnknownLogLevel(other.to_string())),
        }
    }
}

/// Where accepted lines are persisted besides the console.
#[derive(Debug)]
enum LogSink {
    /// Per-run log file, open for the whole backup pass.
    Run(BufWriter<File>),
    /// Append-only file opened and closed again for every line.
    Fallback(PathBuf),
}

#[derive(Debug)]
pub struct Logger {
    threshold: LogLevel,
    sink: LogSink,
}

impl Logger {
    /// Creates a logger that appends each line to `path`, opening the file
    /// only for the duration of that write.
    pub fn fallback(threshold: LogLevel, path: impl Into<PathBuf>) -> Self {
        Self {
            threshold,
            sink: LogSink::Fallback(path.into()),
        }
    }

    /// Creates (or appends to) the run log at `path` and keeps it open until
    /// the logger is dropped.
    pub fn run_log(threshold: LogLevel, path: impl Into<PathBuf>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.into())?;
        Ok(Self {
            threshold,
            sink: LogSink::Run(BufWriter::new(file)),
        })
    }

    /// Whether a message of `level` passes the threshold.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.threshold
    }

    /// Writes `message` at `level` to stdout and the sink if the threshold
    /// allows it. Filtered messages touch neither.
    pub fn log(&mut self, level: LogLevel, message: impl AsRef<str>) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        let line = format_line(Local::now(), level, message.as_ref());
        println!("{line}");
        match &mut self.sink {
            LogSink::Run(writer) => {
                writeln!(writer, "{line}")?;
                writer.flush()
            }
            LogSink::Fallback(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{line}")?;
                file.flush()
            }
        }
    }

    pub fn error(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        self.log(LogLevel::Error, message)
    }

    pub fn info(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn debug(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        self.log(LogLevel::Debug, message)
    }
}

/// Renders one log line without a trailing newline.
pub fn format_line(time: DateTime<Local>, level: LogLevel, message: &str) -> String {
    format!("{} [{level}] {message}", time.format(LINE_TIMESTAMP_FORMAT))
}
