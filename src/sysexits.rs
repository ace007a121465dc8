//! Exit status codes returned by `fbackup` for fatal conditions.
//! Values follow [SYSEXITS](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+11.2-stable&arch=default&format=html).
//! Per-file and per-source failures never change the exit status.

/// value: 65 <br>
/// The settings file is not valid JSON or does not match the expected shape.
pub const EX_DATAERR: i32 = 65;

/// value: 66 <br>
/// The settings file does not exist.
pub const EX_NOINPUT: i32 = 66;

/// value: 69 <br>
/// The destination directory does not exist, so there is nowhere to back up to.
pub const EX_UNAVAILABLE: i32 = 69;

/// value: 73 <br>
/// The per-run log file cannot be created under the destination.
pub const EX_CANTCREAT: i32 = 73;

/// value: 74 <br>
/// An I/O error occurred while reading the settings file or writing the run log.
pub const EX_IOERR: i32 = 74;

/// value: 78 <br>
/// The settings name a log level that does not exist.
pub const EX_CONFIG: i32 = 78;
