//! Error types for the logger crate.

use std::env::VarError;

/// Failures while driving a logger from an external source.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to read log script: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid log script at line {line}: {reason}")]
    InvalidScript { line: usize, reason: String },
}

/// Errors emitted when configuring logging or the tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("tracing has already been initialised")]
    AlreadyInitialised,

    #[error("failed to read {var}: {source}")]
    Env {
        var: &'static str,
        #[source]
        source: VarError,
    },

    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = LogError::InvalidScript {
            line: 4,
            reason: "unknown level `LOUD`".into(),
        };
        assert_eq!(
            e.to_string(),
            "invalid log script at line 4: unknown level `LOUD`"
        );
        assert_eq!(
            InitError::AlreadyInitialised.to_string(),
            "tracing has already been initialised"
        );
        let e = InitError::Env {
            var: "LINMAT_LOG_FILE",
            source: VarError::NotPresent,
        };
        assert!(e.to_string().starts_with("failed to read LINMAT_LOG_FILE: "));
    }
}
