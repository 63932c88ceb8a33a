//! Bridge from `tracing` events to a [`Logger`].

use std::fmt::{self, Write as _};
use std::sync::OnceLock;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::LogConfig;
use crate::error::InitError;
use crate::logger::{LogLevel, LogTarget, Logger};

static INITIALISED: OnceLock<()> = OnceLock::new();

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else {
            Self::Debug
        }
    }
}

/// A [`Layer`] writing each event as one record of a [`Logger`].
///
/// The record body is the event's message followed by its remaining fields
/// as `key=value`. Events are dropped while the logger is closed.
#[derive(Debug, Clone, Copy)]
pub struct LogLayer {
    logger: &'static Logger,
}

impl LogLayer {
    pub fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }

    /// A layer writing to the process-wide logger.
    pub fn global() -> Self {
        Self::new(crate::global())
    }
}

impl<S: Subscriber> Layer<S> for LogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !self.logger.is_open() {
            return;
        }
        let meta = event.metadata();
        let mut fields = FieldVisitor::default();
        event.record(&mut fields);

        let file = meta.file().unwrap_or_else(|| meta.target());
        let line = meta.line().unwrap_or(0);
        self.logger.log(
            LogLevel::from(*meta.level()),
            file,
            line,
            format_args!("{}", fields.finish()),
        );
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    rest: String,
}

impl FieldVisitor {
    fn finish(self) -> String {
        if self.message.is_empty() {
            self.rest.trim_start().to_string()
        } else {
            self.message + &self.rest
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.rest, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.rest, " {}={value:?}", field.name());
        }
    }
}

/// Open the process-wide logger and install it as the global `tracing`
/// subscriber, filtered by `config.filter`.
///
/// Only the first call in a process succeeds; later calls return
/// [`InitError::AlreadyInitialised`]. If another global subscriber is
/// already installed the call fails with [`InitError::Subscriber`] and the
/// logger is not opened.
pub fn init_tracing(config: &LogConfig) -> Result<LogTarget, InitError> {
    let filter = EnvFilter::try_new(&config.filter)?;
    INITIALISED
        .set(())
        .map_err(|_| InitError::AlreadyInitialised)?;

    // Install first so a rejected subscriber leaves the logger closed.
    Registry::default()
        .with(filter)
        .with(LogLayer::global())
        .try_init()?;
    Ok(crate::global().open(config))
}
