//! Structured logging on stderr.
//!
//! Reports go to stdout; diagnostics, including the `log` records emitted by
//! the `langtag` library, are written to stderr through `tracing`.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `LANGTAG_LOG_LEVEL`
/// 3. Default configuration value (`warn`)
///
/// Installing the subscriber also bridges the `log` facade, so library
/// records are filtered and formatted alongside the tool's own events.
/// Repeated calls are ignored; the first subscriber wins.
pub fn init_logging(config: &CliConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use serial_test::serial;

    #[test]
    #[serial]
    fn init_logging_does_not_panic() {
        init_logging(&CliConfig::default());
    }

    #[test]
    #[serial]
    fn init_logging_is_idempotent() {
        let config = CliConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn filter_uses_config_log_level() {
        let config = CliConfig::default().with_log_level(LogLevel::Debug);
        assert_eq!(filter_from_config(&config).to_string(), "debug");
    }
}
