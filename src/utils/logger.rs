//! Logger utility for application-wide logging
//!
//! Console diagnostics go through the `log` crate with an `env_logger`
//! backend on stderr, keeping stdout for program output. `Logger` is a
//! separate operation log that commands append completion records to,
//! optionally backed by a file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::LevelFilter;

use crate::errors::{GeoDeckError, GeoDeckResult};

/// Operation log, written to a file when one is configured
pub struct Logger {
    /// Path of the log file, empty when disabled
    path: String,
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a logger appending to `log_file`
    ///
    /// Records from earlier runs are kept.
    ///
    /// # Returns
    /// A new Logger instance or an error if the file cannot be opened
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(Path::new(log_file))?;
        Ok(Logger {
            path: log_file.to_string(),
            file: Mutex::new(Some(file)),
        })
    }

    /// Creates a logger that discards every record
    pub fn disabled() -> Self {
        Logger {
            path: String::new(),
            file: Mutex::new(None),
        }
    }

    /// Creates a file logger if a path is given, a disabled one otherwise
    pub fn from_option(log_file: Option<&str>) -> io::Result<Self> {
        match log_file {
            Some(path) => Logger::new(path),
            None => Ok(Logger::disabled()),
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> GeoDeckResult<()> {
        let mut guard = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)
                .and_then(|_| file.flush())
                .map_err(|e| GeoDeckError::output(&self.path, e))?;
        }
        Ok(())
    }

    /// Initialize the global `log` backend
    ///
    /// Info level by default, debug with `verbose`; `RUST_LOG` overrides both.
    pub fn init_global_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
        let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .try_init()
    }
}
