//! Session logger writing colored, timestamped records.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::panic::Location;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use colored::Color;

use crate::config::LogConfig;

/// Longest record written, in bytes, including the trailing newline.
pub const MAX_RECORD_LENGTH: usize = 512;

// Escapes are written directly rather than through `Colorize`, whose output
// follows the terminal and `NO_COLOR`; records in a file keep their colour
// whenever `ansi` is set.
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Header colour of records at this level.
    pub fn color(self) -> Color {
        match self {
            Self::Debug => Color::Blue,
            Self::Info => Color::Green,
            Self::Warn => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Parse an exact upper-case level name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == name)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an open logger writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

struct Sink {
    target: LogTarget,
    writer: Box<dyn Write + Send>,
    ansi: bool,
}

impl Sink {
    fn write_record(&mut self, level: LogLevel, file: &str, line: u32, args: fmt::Arguments<'_>) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let record = format_record(level, &timestamp, file, line, args, self.ansi);
        // Logging never fails the caller.
        let _ = self.writer.write_all(record.as_bytes());
    }
}

/// A log session: closed until [`open`](Self::open), then writing every
/// record to its sink until [`close`](Self::close).
pub struct Logger {
    sink: Mutex<Option<Sink>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("target", &self.target())
            .finish()
    }
}

impl Logger {
    /// A closed logger.
    pub const fn new() -> Self {
        Self {
            sink: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Sink>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open the session on `config.path` (create, append).
    ///
    /// If the file cannot be opened a notice goes to stderr and the session
    /// logs to stderr instead. Opening an open logger does nothing and
    /// returns the current target.
    #[track_caller]
    pub fn open(&self, config: &LogConfig) -> LogTarget {
        let caller = Location::caller();
        let mut guard = self.lock();
        if let Some(sink) = guard.as_ref() {
            return sink.target.clone();
        }

        let mut sink = match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.path)
        {
            Ok(file) => Sink {
                target: LogTarget::File(config.path.clone()),
                writer: Box::new(file),
                ansi: config.ansi,
            },
            Err(_) => {
                let _ = io::stderr().write_all(b"Error Opening Log File, Setting STDERR as Log\n");
                Sink {
                    target: LogTarget::Stderr,
                    writer: Box::new(io::stderr()),
                    ansi: config.ansi,
                }
            }
        };
        sink.write_record(
            LogLevel::Info,
            caller.file(),
            caller.line(),
            format_args!("Starting log session..."),
        );
        let target = sink.target.clone();
        *guard = Some(sink);
        target
    }

    /// End the session, flushing and releasing the sink. No-op when closed.
    #[track_caller]
    pub fn close(&self) {
        let caller = Location::caller();
        let mut guard = self.lock();
        if let Some(mut sink) = guard.take() {
            sink.write_record(
                LogLevel::Info,
                caller.file(),
                caller.line(),
                format_args!("Closing log session."),
            );
            let _ = sink.writer.flush();
        }
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// The current sink, or `None` when closed.
    pub fn target(&self) -> Option<LogTarget> {
        self.lock().as_ref().map(|sink| sink.target.clone())
    }

    /// Write one record. No-op when closed; write errors are dropped.
    pub fn log(&self, level: LogLevel, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if let Some(sink) = self.lock().as_mut() {
            sink.write_record(level, file, line, args);
        }
    }
}

/// Render one record:
/// `<colour>[timestamp] [LEVEL] file:line<reset> message\n`.
///
/// The colour escapes are omitted when `ansi` is false. The result is cut
/// to [`MAX_RECORD_LENGTH`] bytes on a char boundary and always ends in a
/// single newline.
pub fn format_record(
    level: LogLevel,
    timestamp: &str,
    file: &str,
    line: u32,
    args: fmt::Arguments<'_>,
    ansi: bool,
) -> String {
    let mut record = if ansi {
        format!(
            "\x1b[{}m[{timestamp}] [{level}] {file}:{line}{RESET} {args}",
            level.color().to_fg_str()
        )
    } else {
        format!("[{timestamp}] [{level}] {file}:{line} {args}")
    };
    if record.ends_with('\n') {
        record.pop();
    }
    truncate_to(&mut record, MAX_RECORD_LENGTH - 1);
    record.push('\n');
    record
}

/// Shorten `s` to at most `max` bytes without splitting a char.
pub(crate) fn truncate_to(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
