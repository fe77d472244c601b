//! Command-line interface for the `herald` binary.
//!
//! `herald` prints a single topic-prefixed message through a [`Logger`],
//! which makes the same output format available to shell scripts. The
//! threshold can come from a flag, the `HERALD_LEVEL` environment variable,
//! or a `.env` file.

use std::{
    env,
    io::{self, IsTerminal, Read},
};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use crate::{level::Severity, logger::Logger};

/// Command-line arguments for the `herald` binary.
#[derive(Debug, Parser)]
#[clap(author, version, about = "Print leveled, topic-prefixed console messages")]
pub struct Args {
    /// Minimum severity to print: debug, info, warn, error, or an integer.
    /// Can be set via HERALD_LEVEL environment variable.
    #[clap(short, long, env = "HERALD_LEVEL", default_value = "info")]
    pub level: String,

    /// When to wrap warnings and errors in terminal colors.
    #[clap(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    #[clap(subcommand)]
    pub command: Command,
}

impl Args {
    /// Applies `--level` to `logger`; an invalid level is printed as an
    /// error and terminates.
    pub fn apply_level(&self, logger: &mut Logger) {
        logger.set_log_level_or_abort(&self.level);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Whether colored lines should carry escape codes.
    ///
    /// Only warnings and errors are colored and both go to stderr, so `Auto`
    /// follows stderr rather than stdout. `NO_COLOR` disables and
    /// `CLICOLOR_FORCE` forces colors under `Auto`.
    pub fn enabled(self, stderr_is_terminal: bool, var: impl Fn(&str) -> Option<String>) -> bool {
        let set = |name: &str| var(name).is_some_and(|value| !value.is_empty() && value != "0");
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto if set("NO_COLOR") => false,
            ColorChoice::Auto if set("CLICOLOR_FORCE") => true,
            ColorChoice::Auto => stderr_is_terminal,
        }
    }

    /// Applies the choice to the process-wide color settings.
    pub fn apply(self) {
        let enabled = self.enabled(io::stderr().is_terminal(), |name| env::var(name).ok());
        colored::control::set_override(enabled);
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a debug message to stdout.
    Debug(Message),
    /// Print an informational message to stdout.
    Info(Message),
    /// Print a warning to stderr.
    Warn(Message),
    /// Print an error to stderr.
    Error(Message),
    /// Print an error to stderr and exit with a non-zero status.
    Abort(Message),
}

#[derive(Debug, clap::Args)]
pub struct Message {
    /// Topic shown in the right-aligned column, e.g. "Configuration file".
    pub topic: String,

    /// Message detail. A single "-" reads the detail from stdin.
    pub detail: Vec<String>,
}

impl Message {
    /// Joins the detail words, reading from `stdin` when the detail is `-`.
    pub fn detail(&self, mut stdin: impl Read) -> anyhow::Result<String> {
        match self.detail.as_slice() {
            [dash] if dash == "-" => {
                let mut detail = String::new();
                stdin
                    .read_to_string(&mut detail)
                    .context("Failed to read message detail from stdin")?;
                Ok(detail)
            }
            words => Ok(words.join(" ")),
        }
    }
}

impl Command {
    fn message(&self) -> &Message {
        match self {
            Command::Debug(message)
            | Command::Info(message)
            | Command::Warn(message)
            | Command::Error(message)
            | Command::Abort(message) => message,
        }
    }

    /// Emits the message through `logger`. `Abort` does not return.
    pub fn run(&self, logger: &mut Logger, stdin: impl Read) -> anyhow::Result<()> {
        let message = self.message();
        let detail = message.detail(stdin)?;
        let severity = match self {
            Command::Debug(_) => Severity::Debug,
            Command::Info(_) => Severity::Info,
            Command::Warn(_) => Severity::Warn,
            Command::Error(_) => Severity::Error,
            Command::Abort(_) => logger.abort_with(&message.topic, detail),
        };
        logger.emit(severity, &message.topic, detail);
        Ok(())
    }
}
