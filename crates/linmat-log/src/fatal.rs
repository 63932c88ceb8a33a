//! Process termination for unrecoverable errors at the top level.
//!
//! The matrix engine reports every failure as a `Result`; these helpers
//! are for binaries that choose to stop on one.

use std::fmt::Display;
use std::io::{self, Write};
use std::panic::Location;

use crate::logger::{LogLevel, truncate_to};

/// Longest fatal message, in bytes.
pub const MAX_MESSAGE_LENGTH: usize = 1024;

/// Render `file:lLINE:msg`, followed by `: cause` when there is one.
///
/// ```
/// use linmat_log::fatal_message;
///
/// assert_eq!(fatal_message("main.rs", 12, "bad input", None), "main.rs:l12:bad input");
/// let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// assert_eq!(
///     fatal_message("main.rs", 12, "write", Some(&cause)),
///     "main.rs:l12:write: disk full",
/// );
/// ```
pub fn fatal_message(file: &str, line: u32, msg: &str, cause: Option<&dyn Display>) -> String {
    let mut message = match cause {
        Some(cause) => format!("{file}:l{line}:{msg}: {cause}"),
        None => format!("{file}:l{line}:{msg}"),
    };
    truncate_to(&mut message, MAX_MESSAGE_LENGTH);
    message
}

/// Log `msg` at ERROR if the process-wide logger is open, close it, print
/// the message to stderr and exit with status 1.
pub fn die(file: &str, line: u32, msg: &str, cause: Option<&dyn Display>) -> ! {
    let message = fatal_message(file, line, msg, cause);
    let logger = crate::global();
    logger.log(LogLevel::Error, file, line, format_args!("{message}"));
    logger.close();

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{message}");
    let _ = stderr.flush();
    std::process::exit(1)
}

/// Unwrap a result or [`die`] at the caller's location.
pub trait OrDie<T> {
    /// The `Ok` value, or terminate with `context` and the error as cause.
    fn or_die(self, context: &str) -> T;
}

impl<T, E: Display> OrDie<T> for Result<T, E> {
    #[track_caller]
    fn or_die(self, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                let caller = Location::caller();
                die(caller.file(), caller.line(), context, Some(&err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_without_cause() {
        assert_eq!(
            fatal_message("src/main.rs", 40, "allocation failed", None),
            "src/main.rs:l40:allocation failed"
        );
    }

    #[test]
    fn test_message_with_cause() {
        let cause = "out of memory: failed to allocate 64 bytes";
        assert_eq!(
            fatal_message("m.rs", 3, "zeros", Some(&cause)),
            "m.rs:l3:zeros: out of memory: failed to allocate 64 bytes"
        );
    }

    #[test]
    fn test_message_is_truncated() {
        let msg = "é".repeat(MAX_MESSAGE_LENGTH);
        let out = fatal_message("m.rs", 1, &msg, None);
        assert!(out.len() <= MAX_MESSAGE_LENGTH);
        assert!(out.len() > MAX_MESSAGE_LENGTH - 2);
        assert!(out.starts_with("m.rs:l1:é"));
    }

    #[test]
    fn test_or_die_passes_ok_through() {
        let ok: Result<u8, String> = Ok(7);
        assert_eq!(ok.or_die("unreachable"), 7);
    }
}
