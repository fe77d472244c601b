//! Output streams a logger writes to.

use std::{fmt, io};

/// The pair of streams a [`Logger`](crate::Logger) prints to.
///
/// Debug and info lines go to `out`, warnings and errors to `err`.
pub struct Console {
    out: Box<dyn io::Write + Send>,
    err: Box<dyn io::Write + Send>,
}

impl Console {
    pub fn new(out: impl io::Write + Send + 'static, err: impl io::Write + Send + 'static) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    /// The process's standard output and standard error.
    pub fn std() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    /// Writes `line` plus a newline to stderr when `to_err` is set, stdout otherwise.
    pub(crate) fn write_line(&mut self, to_err: bool, line: impl fmt::Display) -> io::Result<()> {
        let stream = if to_err { &mut self.err } else { &mut self.out };
        writeln!(stream, "{line}")?;
        stream.flush()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::std()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
