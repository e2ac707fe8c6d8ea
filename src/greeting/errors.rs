/// Errors from writing the greeting out.
use std::io;

use thiserror::Error;

/// Errors that can occur while greeting.
///
/// Building the greeting is infallible; only the environment can fail us.
#[derive(Debug, Error)]
pub enum GreetError {
    /// Standard output could not be written or flushed.
    #[error("failed to write greeting: {0}")]
    Write(#[from] io::Error),
}

impl GreetError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_silent() { 0 } else { 1 }
    }

    /// Whether the error is worth telling the user about.
    ///
    /// A closed pipe just means the reader went away.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
