//! Process termination used by fatal logger calls.

use std::num::NonZeroI32;

const ABORT_STATUS: NonZeroI32 = match NonZeroI32::new(1) {
    Some(code) => code,
    None => unreachable!(),
};

/// Ends the current flow of control after a fatal message has been emitted.
///
/// Production code exits the process; tests install an implementation that
/// unwinds instead so the fatal path can be observed.
pub trait Terminator: Send {
    fn terminate(&self) -> !;
}

/// Exits the process with a fixed status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessTerminator {
    code: NonZeroI32,
}

impl ProcessTerminator {
    pub fn with_code(code: NonZeroI32) -> Self {
        Self { code }
    }

    pub fn code(&self) -> i32 {
        self.code.get()
    }
}

impl Default for ProcessTerminator {
    fn default() -> Self {
        Self {
            code: ABORT_STATUS,
        }
    }
}

impl Terminator for ProcessTerminator {
    fn terminate(&self) -> ! {
        log::debug!("terminating process with status {}", self.code);
        std::process::exit(self.code.get())
    }
}
