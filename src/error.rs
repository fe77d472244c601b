//! Error types for herald.

use thiserror::Error;

/// Errors raised while configuring a [`Logger`](crate::Logger).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// The value is neither an integer nor one of `debug`, `info`, `warn`, `error`.
    #[error("Log level '{0}' is not a valid log level.")]
    InvalidLogLevel(String),
}
