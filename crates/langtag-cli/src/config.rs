//! Tool configuration parsed from environment variables.
//!
//! Every setting can be supplied through a `LANGTAG_`-prefixed environment
//! variable and overridden on the command line.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "LANGTAG_LOG_LEVEL";
/// Environment variable enabling JSON output.
pub const JSON_VAR: &str = "LANGTAG_JSON";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so that only range compilation failures and errors
/// reach stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every classification decision.
    Trace,
    /// Invalid subtags and extlang overflow.
    Debug,
    /// Informational messages.
    Info,
    /// Recoverable failures.
    #[default]
    Warn,
    /// Command failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub const fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "Yes" | "on" | "ON" | "On" => Some(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "No" | "off" | "OFF" | "Off" => {
            Some(false)
        }
        _ => None,
    }
}

/// Configuration for the `langtag` binary.
///
/// # Environment Variables
///
/// - `LANGTAG_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `LANGTAG_JSON`: emit JSON reports (`1`/`true`/`yes`/`on` or
///   `0`/`false`/`no`/`off`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Emit machine-readable JSON instead of text.
    pub json: bool,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value. Missing variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable contains an invalid
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let json = match lookup(JSON_VAR) {
            Some(val) => parse_env_bool(&val).ok_or_else(|| {
                CliError::InvalidConfig(format!(
                    "invalid {JSON_VAR} value '{val}', expected a boolean such as 1, true, yes or on"
                ))
            })?,
            None => false,
        };

        Ok(Self { log_level, json })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// Command-line values take precedence over environment-based defaults.
    #[must_use]
    pub const fn apply_overrides(mut self, log_level: Option<LogLevel>, json: Option<bool>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(json) = json {
            self.json = json;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub const fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
