//! `linmat-log`: colored, timestamped file logging for linmat.
//!
//! - [`Logger`]: an open/close session around a log file, falling back to
//!   stderr when the file cannot be opened.
//! - [`LogLayer`] / [`init_tracing`]: routes `tracing` events from
//!   `linmat-core` into the process-wide logger.
//! - [`fatal`]: `die!` and [`OrDie`] for top-level callers that turn an
//!   error into process termination.
//! - [`replay`](replay::replay): drives a logger from a `LEVEL message` script.
//!
//! ```no_run
//! use linmat_log::{LogConfig, log_info};
//!
//! linmat_log::open(&LogConfig::default());
//! log_info!("rank = {}", 3);
//! linmat_log::close();
//! ```

pub mod config;
pub mod error;
pub mod fatal;
pub mod layer;
pub mod logger;
pub mod replay;

pub use config::LogConfig;
pub use error::{InitError, LogError};
pub use fatal::{OrDie, die, fatal_message};
pub use layer::{LogLayer, init_tracing};
pub use logger::{LogLevel, LogTarget, Logger, MAX_RECORD_LENGTH};

static GLOBAL: Logger = Logger::new();

/// The process-wide logger used by the `log_*!` macros, [`LogLayer::global`]
/// and [`die`].
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Open the process-wide logger. See [`Logger::open`].
#[track_caller]
pub fn open(config: &LogConfig) -> LogTarget {
    GLOBAL.open(config)
}

/// Close the process-wide logger. See [`Logger::close`].
#[track_caller]
pub fn close() {
    GLOBAL.close();
}

/// Whether the process-wide logger currently has a sink.
pub fn is_open() -> bool {
    GLOBAL.is_open()
}

/// Log at `DEBUG` through the process-wide logger.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::global().log($crate::LogLevel::Debug, file!(), line!(), format_args!($($arg)+))
    };
}

/// Log at `INFO` through the process-wide logger.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::global().log($crate::LogLevel::Info, file!(), line!(), format_args!($($arg)+))
    };
}

/// Log at `WARN` through the process-wide logger.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::global().log($crate::LogLevel::Warn, file!(), line!(), format_args!($($arg)+))
    };
}

/// Log at `ERROR` through the process-wide logger.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::global().log($crate::LogLevel::Error, file!(), line!(), format_args!($($arg)+))
    };
}

/// Print `file:lLINE:message` (formatted) and terminate the process.
///
/// See [`fatal::die`].
#[macro_export]
macro_rules! die {
    ($($arg:tt)+) => {
        $crate::fatal::die(file!(), line!(), &format!($($arg)+), None)
    };
}
