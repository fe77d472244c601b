use std::{
    io,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Console, Level, Logger, LoggerBuilder, Terminator};

pub const YELLOW: &str = "\u{1b}[33m";
pub const RED: &str = "\u{1b}[31m";
pub const RESET: &str = "\u{1b}[0m";

/// In-memory stream whose contents stay readable after it is handed to a logger.
#[derive(Clone, Default)]
pub struct CapturedStream {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedStream {
    pub fn contents(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).expect("captured output is not UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl io::Write for CapturedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Panic payload raised by [`PanicTerminator`].
pub struct Terminated;

pub struct PanicTerminator;

impl Terminator for PanicTerminator {
    fn terminate(&self) -> ! {
        panic::panic_any(Terminated)
    }
}

/// Serializes tests that depend on `colored`'s process-wide override.
static COLOR_OVERRIDE: Mutex<()> = Mutex::new(());

pub struct TestLogger {
    pub logger: Logger,
    pub out: CapturedStream,
    pub err: CapturedStream,
    /// Colors stay forced on while this is held.
    pub _colors: MutexGuard<'static, ()>,
}

pub fn captured_logger(level: impl Into<Level>) -> TestLogger {
    captured_logger_with(Logger::builder().level(level))
}

/// Finishes `builder` with captured streams and a terminator that unwinds.
pub fn captured_logger_with(builder: LoggerBuilder) -> TestLogger {
    let colors = COLOR_OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner);
    colored::control::set_override(true);

    let out = CapturedStream::default();
    let err = CapturedStream::default();
    let logger = builder
        .console(Console::new(out.clone(), err.clone()))
        .terminator(PanicTerminator)
        .build();

    TestLogger {
        logger,
        out,
        err,
        _colors: colors,
    }
}

/// Runs `f` and asserts it ended through the logger's terminator.
pub fn assert_terminates(f: impl FnOnce()) {
    let payload = panic::catch_unwind(AssertUnwindSafe(f)).err().expect("expected termination");
    assert!(payload.is::<Terminated>(), "panicked for another reason");
}
