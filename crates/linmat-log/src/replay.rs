//! Drive a [`Logger`] from a script of `LEVEL message` lines.
//!
//! ```text
//! INFO starting
//! WARN pivot below threshold
//! END
//! ```
//!
//! Levels are `DEBUG`, `INFO`, `WARN` and `ERROR`. A line reading `END`
//! stops the script; blank lines are skipped.

use std::io::BufRead;

use crate::error::LogError;
use crate::logger::{LogLevel, Logger};

/// File name recorded for every replayed record.
pub const SCRIPT_FILE: &str = "<script>";

const END: &str = "END";

/// Log every line of `reader` through `logger` and return how many records
/// were logged.
///
/// Records carry [`SCRIPT_FILE`] and the 1-based script line number. An
/// unknown level, a level with no message, or running out of input before
/// `END` is [`LogError::InvalidScript`]; records before the bad line have
/// already been written.
pub fn replay<R: BufRead>(logger: &Logger, reader: R) -> Result<usize, LogError> {
    let mut logged = 0;
    let mut last_line = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        last_line = lineno;

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let (token, message) = match text.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim_start()),
            None => (text, ""),
        };
        if token == END {
            return Ok(logged);
        }

        let level = LogLevel::from_name(token).ok_or_else(|| LogError::InvalidScript {
            line: lineno,
            reason: format!("unknown level `{token}`"),
        })?;
        if message.is_empty() {
            return Err(LogError::InvalidScript {
                line: lineno,
                reason: format!("{level} has no message"),
            });
        }

        let script_line = u32::try_from(lineno).unwrap_or(u32::MAX);
        logger.log(level, SCRIPT_FILE, script_line, format_args!("{message}"));
        logged += 1;
    }

    Err(LogError::InvalidScript {
        line: last_line + 1,
        reason: format!("end of input without `{END}`"),
    })
}
