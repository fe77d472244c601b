//! Leveled console messages with a fixed-width topic column.
//!
//! ```no_run
//! use herald::{Logger, Severity};
//!
//! let mut logger = Logger::new(Severity::Info);
//! logger.info("Configuration file", "missing, using defaults");
//! logger.warn("Deprecation", "the `site` option is deprecated");
//! ```

pub mod cli;
pub mod console;
pub mod error;
pub mod level;
pub mod logger;
pub mod shared;
pub mod terminator;

pub use console::Console;
pub use error::LogError;
pub use level::{Level, Severity};
pub use logger::{format_message, formatted_topic, HistoryPolicy, Logger, LoggerBuilder};
pub use shared::SharedLogger;
pub use terminator::{ProcessTerminator, Terminator};

#[cfg(test)]
mod tests;
