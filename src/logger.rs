//! The leveled console logger.
//!
//! Every message is built as a right-aligned topic column followed by the
//! message detail, recorded in the logger's history, and printed when its
//! severity reaches the configured threshold.

use std::fmt;

use colored::Colorize;

use crate::{
    console::Console,
    error::LogError,
    level::{Level, Severity},
    terminator::{ProcessTerminator, Terminator},
};

/// Width of the right-aligned topic column, trailing space included.
pub const TOPIC_WIDTH: usize = 20;

/// Which messages end up in a logger's history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryPolicy {
    /// Every formatted message, printed or suppressed.
    #[default]
    All,
    /// Only messages that passed the threshold and were printed.
    Printed,
}

/// Formats a topic as `"<topic> "` right-justified to [`TOPIC_WIDTH`] characters.
///
/// Longer topics are never truncated; the column grows instead.
pub fn formatted_topic(topic: &str) -> String {
    format!("{:>width$}", format!("{topic} "), width = TOPIC_WIDTH)
}

/// Builds a full message line without recording it anywhere.
///
/// Each whitespace run in `detail` collapses to a single space.
pub fn format_message(topic: &str, detail: impl fmt::Display) -> String {
    let mut message = formatted_topic(topic);
    let mut in_whitespace = false;
    for c in detail.to_string().chars() {
        if is_whitespace(c) {
            if !in_whitespace {
                message.push(' ');
            }
            in_whitespace = true;
        } else {
            message.push(c);
            in_whitespace = false;
        }
    }
    message
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// A leveled console logger with an in-memory message history.
///
/// Detail arguments accept anything printable; pass `""` when a message has
/// no detail.
pub struct Logger {
    threshold: i64,
    history: Vec<String>,
    policy: HistoryPolicy,
    console: Console,
    terminator: Box<dyn Terminator>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("history", &self.history.len())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Creates a logger writing to the standard streams.
    pub fn new(level: impl Into<Level>) -> Self {
        Self::builder().level(level).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Current threshold. Messages below it are not printed.
    pub fn log_level(&self) -> i64 {
        self.threshold
    }

    pub fn set_log_level(&mut self, level: impl Into<Level>) {
        let level = level.into();
        self.threshold = level.value();
        log::debug!("log level set to {level} ({})", self.threshold);
    }

    /// Parses `raw` as a level and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidLogLevel`] if `raw` is neither an integer
    /// nor a severity name. The threshold is left untouched.
    pub fn try_set_log_level(&mut self, raw: &str) -> Result<(), LogError> {
        let level = raw.parse::<Level>()?;
        self.set_log_level(level);
        Ok(())
    }

    /// Like [`try_set_log_level`](Self::try_set_log_level), but an invalid
    /// level is reported as an error message and terminates.
    pub fn set_log_level_or_abort(&mut self, raw: &str) {
        if let Err(err) = self.try_set_log_level(raw) {
            self.abort_with(&err.to_string(), "");
        }
    }

    /// Every message recorded so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.history
    }

    /// Formats a message and records it in the history without printing.
    pub fn message(&mut self, topic: &str, detail: impl fmt::Display) -> String {
        let message = format_message(topic, detail);
        self.history.push(message.clone());
        message
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity.value() >= self.threshold
    }

    /// Formats, records and, if the threshold allows, prints one message.
    pub fn emit(&mut self, severity: Severity, topic: &str, detail: impl fmt::Display) {
        let message = format_message(topic, detail);
        let printed = self.enabled(severity);
        if printed || self.policy == HistoryPolicy::All {
            self.history.push(message.clone());
        }
        if !printed {
            log::trace!(
                "suppressed {severity} message below threshold {}",
                self.threshold
            );
            return;
        }

        let result = match severity {
            Severity::Debug | Severity::Info => self.console.write_line(false, message),
            Severity::Warn => self.console.write_line(true, message.yellow()),
            Severity::Error => self.console.write_line(true, message.red()),
        };
        if let Err(err) = result {
            log::debug!("failed to write {severity} message: {err}");
        }
    }

    /// Prints to stdout.
    pub fn debug(&mut self, topic: &str, detail: impl fmt::Display) {
        self.emit(Severity::Debug, topic, detail)
    }

    /// Prints to stdout.
    pub fn info(&mut self, topic: &str, detail: impl fmt::Display) {
        self.emit(Severity::Info, topic, detail)
    }

    /// Prints to stderr in yellow.
    pub fn warn(&mut self, topic: &str, detail: impl fmt::Display) {
        self.emit(Severity::Warn, topic, detail)
    }

    /// Prints to stderr in red.
    pub fn error(&mut self, topic: &str, detail: impl fmt::Display) {
        self.emit(Severity::Error, topic, detail)
    }

    /// Emits an error message, then terminates whether or not it was printed.
    pub fn abort_with(&mut self, topic: &str, detail: impl fmt::Display) -> ! {
        self.error(topic, detail);
        self.terminator.terminate()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`Logger`] with custom streams, termination or history policy.
#[derive(Default)]
pub struct LoggerBuilder {
    level: Level,
    policy: HistoryPolicy,
    console: Option<Console>,
    terminator: Option<Box<dyn Terminator>>,
}

impl LoggerBuilder {
    pub fn level(mut self, level: impl Into<Level>) -> Self {
        self.level = level.into();
        self
    }

    pub fn history(mut self, policy: HistoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn console(mut self, console: Console) -> Self {
        self.console = Some(console);
        self
    }

    pub fn terminator(mut self, terminator: impl Terminator + 'static) -> Self {
        self.terminator = Some(Box::new(terminator));
        self
    }

    pub fn build(self) -> Logger {
        let mut logger = Logger {
            threshold: Level::default().value(),
            history: Vec::new(),
            policy: self.policy,
            console: self.console.unwrap_or_default(),
            terminator: self
                .terminator
                .unwrap_or_else(|| Box::new(ProcessTerminator::default())),
        };
        logger.set_log_level(self.level);
        logger
    }
}
