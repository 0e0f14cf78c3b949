//! Error types for the `langtag` command-line tool.

use thiserror::Error;

/// Errors raised while preparing the command-line environment.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
