//! Severities and log levels.
//!
//! A [`Severity`] is one of the four named message categories. A [`Level`] is
//! what a logger threshold is configured from: either a named severity or an
//! arbitrary integer, which is compared ordinally against severity values.

use std::{fmt, str::FromStr};

use crate::error::LogError;

/// Message severity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Numeric value used when comparing against a logger threshold.
    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    /// Names are matched exactly; `"DEBUG"` or `" info"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| LogError::InvalidLogLevel(s.to_string()))
    }
}

/// A logger threshold, validated once at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Numeric(i64),
    Named(Severity),
}

impl Level {
    /// Threshold value this level resolves to.
    pub fn value(self) -> i64 {
        match self {
            Level::Numeric(value) => value,
            Level::Named(severity) => severity.value(),
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Named(Severity::Info)
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        Level::Named(severity)
    }
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Level::Numeric(value)
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level::Numeric(value.into())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Numeric(value) => write!(f, "{value}"),
            Level::Named(severity) => write!(f, "{severity}"),
        }
    }
}

impl FromStr for Level {
    type Err = LogError;

    /// Accepts a plain decimal integer (`-?[0-9]+`) or one of the four
    /// severity names. Signs like `+5` and out-of-range integers are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<i64>()
                .map(Level::Numeric)
                .map_err(|_| LogError::InvalidLogLevel(s.to_string()));
        }
        s.parse::<Severity>().map(Level::Named)
    }
}
