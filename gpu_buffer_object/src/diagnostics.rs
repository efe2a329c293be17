/// Global logger registry for buffer objects and device backends
///
/// Buffer objects are single-threaded, but the logger is process-wide so that
/// every graphics context reports through the same sink. It is kept in
/// thread-safe static storage with an RwLock.

use std::sync::{OnceLock, RwLock};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Logging entry points used by the `gbo_*` macros
///
/// # Example
///
/// ```no_run
/// use gpu_buffer_object::gbo::{Diagnostics, log::{Logger, LogEntry}};
///
/// struct FileLogger;
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
///
/// Diagnostics::set_logger(FileLogger);
/// ```
pub struct Diagnostics;

impl Diagnostics {
    /// Replace the active logger
    pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(logger_impl);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Log a message without file:line
    ///
    /// Used by gbo_trace!, gbo_debug!, gbo_info! and gbo_warn!.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry::new(severity, source, message));
    }

    /// Log a message with file:line information
    ///
    /// Used by gbo_error! (and therefore gbo_err! / gbo_bail!).
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry::new(severity, source, message).with_location(file, line));
    }

    fn dispatch(entry: LogEntry) {
        // A poisoned lock only means a custom logger panicked; drop the entry.
        if let Ok(lock) = logger().read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
