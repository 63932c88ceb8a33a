//! Logger configuration, from defaults or the environment.

use std::env::VarError;
use std::path::PathBuf;

use crate::error::InitError;

/// Log file path, relative to the working directory unless absolute.
pub const LOG_FILE_VAR: &str = "LINMAT_LOG_FILE";
/// `0` or `false` disables colour escapes.
pub const LOG_ANSI_VAR: &str = "LINMAT_LOG_ANSI";
/// `EnvFilter` directive used by [`init_tracing`](crate::init_tracing).
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

pub const DEFAULT_LOG_FILE: &str = "linmat.log";
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: PathBuf,
    pub ansi: bool,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            ansi: true,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Log to `path` with the remaining settings at their defaults.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Read [`LOG_FILE_VAR`], [`LOG_ANSI_VAR`] and [`LOG_FILTER_VAR`].
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self, InitError> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InitError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut config = Self::default();
        if let Some(path) = read_var(&lookup, LOG_FILE_VAR)? {
            config.path = PathBuf::from(path);
        }
        if let Some(ansi) = read_var(&lookup, LOG_ANSI_VAR)? {
            config.ansi = !matches!(ansi.trim().to_ascii_lowercase().as_str(), "0" | "false");
        }
        if let Some(filter) = read_var(&lookup, LOG_FILTER_VAR)? {
            config.filter = filter;
        }
        Ok(config)
    }
}

fn read_var<F>(lookup: &F, var: &'static str) -> Result<Option<String>, InitError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(raw) if !raw.trim().is_empty() => Ok(Some(raw)),
        Ok(_) | Err(VarError::NotPresent) => Ok(None),
        Err(source) => Err(InitError::Env { var, source }),
    }
}
